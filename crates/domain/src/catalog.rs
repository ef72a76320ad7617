// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Duty, DutyId, DutyRecord};

/// The fixed set of duties available for a session.
///
/// The catalog keeps duties in the order they were supplied and also
/// provides a chronological view ordered by start time. Duties with equal
/// start times keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DutyCatalog {
    duties: Vec<Duty>,
    /// Indices into `duties`, ascending by start time.
    chronological: Vec<usize>,
}

impl DutyCatalog {
    /// Creates a catalog from already-parsed duties.
    #[must_use]
    pub fn new(duties: Vec<Duty>) -> Self {
        let mut chronological: Vec<usize> = (0..duties.len()).collect();
        // sort_by_key is stable, so ties keep input order
        chronological.sort_by_key(|&index| duties[index].start());

        Self {
            duties,
            chronological,
        }
    }

    /// Creates a catalog from wire records.
    ///
    /// # Errors
    ///
    /// Returns the first `DomainError::InvalidTimestamp` encountered.
    /// No partial catalog is produced.
    pub fn from_records<I>(records: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = DutyRecord>,
    {
        let duties: Vec<Duty> = records
            .into_iter()
            .map(Duty::from_record)
            .collect::<Result<_, _>>()?;
        Ok(Self::new(duties))
    }

    /// All duties, in input order.
    #[must_use]
    pub fn duties(&self) -> &[Duty] {
        &self.duties
    }

    /// All duties, ascending by start time.
    pub fn chronological(&self) -> impl Iterator<Item = &Duty> + '_ {
        self.chronological.iter().map(|&index| &self.duties[index])
    }

    #[must_use]
    pub fn get(&self, id: DutyId) -> Option<&Duty> {
        self.duties.iter().find(|duty| duty.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: DutyId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.duties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duties.is_empty()
    }
}
