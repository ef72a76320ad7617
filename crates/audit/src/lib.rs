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
    clippy::all
)]

use duty_signup_domain::DutyId;
use serde::Serialize;

/// Identifies who requested an assignment change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    /// The actor's identifier (e.g., a username).
    pub id: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

/// The assignment change that was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    /// A duty was added to the assignment set.
    AssignDuty,
    /// A duty was removed from the assignment set.
    UnassignDuty,
}

impl Action {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AssignDuty => "AssignDuty",
            Self::UnassignDuty => "UnassignDuty",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A summary of the assignment set at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    /// A string rendering of the assigned ids, e.g. `assigned=[1,4]`.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a snapshot from raw data.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Creates a snapshot listing the given assigned ids in iteration order.
    #[must_use]
    pub fn from_assigned<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = DutyId>,
    {
        let ids: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
        Self::new(format!("assigned=[{}]", ids.join(",")))
    }
}

/// An immutable record of one assignment transition.
///
/// Every successful assign or unassign produces exactly one event, including
/// an unassign of a duty that was not assigned (where `before == after`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEvent {
    /// Who requested the change.
    pub actor: Actor,
    /// What was done.
    pub action: Action,
    /// The duty the action targeted.
    pub duty_id: DutyId,
    /// The assignment set before the transition.
    pub before: StateSnapshot,
    /// The assignment set after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    #[must_use]
    pub const fn new(
        actor: Actor,
        action: Action,
        duty_id: DutyId,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            actor,
            action,
            duty_id,
            before,
            after,
        }
    }

    /// Whether the transition left the assignment set unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}

/// Append-only, in-memory audit trail for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuditLog {
    events: Vec<AuditEvent>,
}

impl AuditLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event to the trail.
    pub fn record(&mut self, event: AuditEvent) {
        self.events.push(event);
    }

    /// All events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Events that targeted `duty_id`, oldest first.
    pub fn for_duty(&self, duty_id: DutyId) -> impl Iterator<Item = &AuditEvent> + '_ {
        self.events
            .iter()
            .filter(move |event| event.duty_id == duty_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
