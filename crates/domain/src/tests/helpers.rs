// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Duty, DutyId};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Monday 2024-03-04 00:00 UTC, the reference day for fixtures.
pub const DAY: OffsetDateTime = datetime!(2024-03-04 00:00 UTC);

pub fn create_test_duty(id: i64, name: &str, start: OffsetDateTime, hours: f64) -> Duty {
    Duty::new(
        DutyId::new(id),
        name,
        "Central",
        start,
        start + Duration::seconds_f64(hours * 3600.0),
    )
}

/// A duty on the reference day between two wall-clock hours.
pub fn create_day_duty(id: i64, name: &str, start_hour: f64, end_hour: f64) -> Duty {
    create_test_duty(
        id,
        name,
        DAY + Duration::seconds_f64(start_hour * 3600.0),
        end_hour - start_hour,
    )
}
