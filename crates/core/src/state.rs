// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duty_signup_audit::{AuditEvent, StateSnapshot};
use duty_signup_domain::DutyId;
use serde::Serialize;
use std::collections::BTreeSet;

/// The set of duty ids the user has chosen.
///
/// The set itself does not know about the catalog. Ids enter it only through
/// `apply`, which rejects ids the catalog does not contain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssignmentSet {
    ids: BTreeSet<DutyId>,
}

impl AssignmentSet {
    /// Creates an empty assignment set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Adds `id`. Returns `false` if it was already present.
    pub(crate) fn assign(&mut self, id: DutyId) -> bool {
        self.ids.insert(id)
    }

    /// Removes `id`. Returns `false` if it was not present.
    pub(crate) fn unassign(&mut self, id: DutyId) -> bool {
        self.ids.remove(&id)
    }

    #[must_use]
    pub fn contains(&self, id: DutyId) -> bool {
        self.ids.contains(&id)
    }

    /// Assigned ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DutyId> + '_ {
        self.ids.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The assignment state of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct State {
    /// Duties the user has signed up for.
    pub assigned: AssignmentSet,
}

impl State {
    /// Creates a state with nothing assigned.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assigned: AssignmentSet::new(),
        }
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::from_assigned(self.assigned.iter())
    }
}

/// The result of a successful state transition.
///
/// Transitions either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
