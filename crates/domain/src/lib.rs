// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod types;
mod warning;

#[cfg(test)]
mod tests;

pub use catalog::DutyCatalog;
pub use error::DomainError;
pub use types::{Duty, DutyId, DutyRecord, Interval, parse_timestamp};
pub use warning::{REST_MARGIN, Warning, find_warning};
