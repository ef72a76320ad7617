// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Session;
use duty_signup_audit::Actor;
use duty_signup_domain::{Duty, DutyCatalog, DutyId};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Monday 2024-03-04 00:00 UTC, the reference day for fixtures.
pub const DAY: OffsetDateTime = datetime!(2024-03-04 00:00 UTC);

pub fn create_test_actor() -> Actor {
    Actor::new("crew-17")
}

/// A duty on the reference day between two wall-clock hours.
pub fn create_day_duty(id: i64, name: &str, start_hour: f64, end_hour: f64) -> Duty {
    Duty::new(
        DutyId::new(id),
        name,
        "Central",
        DAY + Duration::seconds_f64(start_hour * 3600.0),
        DAY + Duration::seconds_f64(end_hour * 3600.0),
    )
}

/// Three duties spread far enough apart that none warns about another.
pub fn create_test_catalog() -> DutyCatalog {
    DutyCatalog::new(vec![
        create_day_duty(3, "Evening", 48.0 + 18.0, 48.0 + 22.0),
        create_day_duty(1, "Morning", 6.0, 10.0),
        create_day_duty(2, "Midday", 24.0 + 11.0, 24.0 + 15.0),
    ])
}

pub fn create_test_session(catalog: DutyCatalog) -> Session {
    Session::new(catalog, create_test_actor())
}

pub fn ids(duties: &[&Duty]) -> Vec<i64> {
    duties.iter().map(|duty| duty.id().value()).collect()
}
