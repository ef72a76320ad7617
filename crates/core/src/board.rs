// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived views over the catalog for one decision cycle.
//!
//! Nothing here is cached. Callers rebuild the board whenever the
//! assignment set changes.

use crate::state::AssignmentSet;
use duty_signup_domain::{Duty, DutyCatalog, DutyId, Warning, find_warning};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Splits the catalog's chronological view by assignment.
///
/// # Returns
///
/// `(assigned, unassigned)`, each in chronological order.
#[must_use]
pub fn partition<'a>(
    catalog: &'a DutyCatalog,
    assignment: &AssignmentSet,
) -> (Vec<&'a Duty>, Vec<&'a Duty>) {
    catalog
        .chronological()
        .partition(|duty| assignment.contains(duty.id()))
}

/// Computes the warning (or none) for each unassigned duty.
///
/// # Arguments
///
/// * `unassigned` - Candidate duties
/// * `assigned` - Currently assigned duties, in chronological order
#[must_use]
pub fn compute_warnings(
    unassigned: &[&Duty],
    assigned: &[&Duty],
) -> BTreeMap<DutyId, Option<Warning>> {
    unassigned
        .iter()
        .map(|duty| (duty.id(), find_warning(duty, assigned.iter().copied())))
        .collect()
}

/// Everything a presentation layer needs for one decision cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DutyBoard<'a> {
    /// Assigned duties, chronological.
    pub assigned: Vec<&'a Duty>,
    /// Unassigned duties, chronological.
    pub unassigned: Vec<&'a Duty>,
    /// Warning per unassigned duty. Assigned duties have no entry.
    pub warnings: BTreeMap<DutyId, Option<Warning>>,
}

impl<'a> DutyBoard<'a> {
    /// Builds the board for the current assignment set.
    #[must_use]
    pub fn build(catalog: &'a DutyCatalog, assignment: &AssignmentSet) -> Self {
        let (assigned, unassigned) = partition(catalog, assignment);
        let warnings: BTreeMap<DutyId, Option<Warning>> = compute_warnings(&unassigned, &assigned);

        debug!(
            assigned = assigned.len(),
            unassigned = unassigned.len(),
            warned = warnings.values().filter(|w| w.is_some()).count(),
            "Built duty board"
        );

        Self {
            assigned,
            unassigned,
            warnings,
        }
    }

    /// The warning for an unassigned duty, if any.
    #[must_use]
    pub fn warning_for(&self, id: DutyId) -> Option<&Warning> {
        self.warnings.get(&id).and_then(Option::as_ref)
    }

    /// Whether `id` can be assigned without a warning.
    ///
    /// Returns `false` for assigned duties and ids not on the board.
    #[must_use]
    pub fn is_assignable(&self, id: DutyId) -> bool {
        matches!(self.warnings.get(&id), Some(None))
    }
}
