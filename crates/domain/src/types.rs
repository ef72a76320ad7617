// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

/// Identifies a duty within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DutyId(i64);

impl DutyId {
    /// Creates a new `DutyId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for DutyId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for DutyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-open span of time.
///
/// Two intervals overlap only when they share a non-empty stretch of time.
/// Intervals that merely touch at an endpoint do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Inclusive start.
    pub start: OffsetDateTime,
    /// Exclusive end.
    pub end: OffsetDateTime,
}

impl Interval {
    /// Creates a new `Interval`.
    #[must_use]
    pub const fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self { start, end }
    }

    /// Checks whether this interval shares any time with `other`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns this interval widened by `margin` on both sides.
    ///
    /// Saturates at the representable date range instead of overflowing.
    #[must_use]
    pub fn expanded(&self, margin: Duration) -> Self {
        Self {
            start: self.start.saturating_sub(margin),
            end: self.end.saturating_add(margin),
        }
    }
}

/// A duty record as supplied by the external data source.
///
/// Timestamps are kept as strings until [`Duty::from_record`] parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyRecord {
    pub id: i64,
    pub depot: String,
    pub name: String,
    pub start: String,
    pub end: String,
}

/// A single work shift.
///
/// Duties are immutable once constructed. The catalog assumes
/// `start < end` and does not check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    id: DutyId,
    name: String,
    depot: String,
    #[serde(with = "time::serde::rfc3339")]
    start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end: OffsetDateTime,
}

impl Duty {
    /// Creates a new `Duty`.
    ///
    /// # Arguments
    ///
    /// * `id` - The duty identifier
    /// * `name` - The display name of the duty
    /// * `depot` - The depot the duty starts from
    /// * `start` - When the duty starts
    /// * `end` - When the duty ends
    #[must_use]
    pub fn new(
        id: DutyId,
        name: &str,
        depot: &str,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            depot: depot.to_string(),
            start,
            end,
        }
    }

    /// Parses a wire record into a `Duty`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if either timestamp cannot be parsed.
    pub fn from_record(record: DutyRecord) -> Result<Self, DomainError> {
        let start: OffsetDateTime = parse_timestamp(&record.start)?;
        let end: OffsetDateTime = parse_timestamp(&record.end)?;

        Ok(Self {
            id: DutyId::new(record.id),
            name: record.name,
            depot: record.depot,
            start,
            end,
        })
    }

    #[must_use]
    pub const fn id(&self) -> DutyId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn depot(&self) -> &str {
        &self.depot
    }

    #[must_use]
    pub const fn start(&self) -> OffsetDateTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> OffsetDateTime {
        self.end
    }

    /// Returns the time span covered by this duty.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

/// Parses a duty timestamp.
///
/// Accepts RFC 3339 (`2024-03-01T09:00:00Z`, `2024-03-01T09:00:00+02:00`).
/// A timestamp without an offset (`2024-03-01T09:00:00`) is taken as UTC.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the value matches neither form.
/// The reported reason is the RFC 3339 parser's.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, DomainError> {
    let rfc3339_error = match OffsetDateTime::parse(value, &Rfc3339) {
        Ok(timestamp) => return Ok(timestamp),
        Err(err) => err,
    };

    let without_offset = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    PrimitiveDateTime::parse(value, without_offset)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| DomainError::InvalidTimestamp {
            value: value.to_string(),
            reason: rfc3339_error.to_string(),
        })
}
