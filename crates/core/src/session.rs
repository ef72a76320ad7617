// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A single user's sign-up session.
//!
//! The session owns the catalog, the current assignment state and the audit
//! trail. It is discarded when the user is done; nothing is persisted.

use crate::apply::{apply, transition};
use crate::board::{DutyBoard, partition};
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use duty_signup_audit::{Actor, AuditEvent, AuditLog};
use duty_signup_domain::{DomainError, Duty, DutyCatalog, DutyId, Warning, find_warning};
use tracing::warn;

/// The outcome of a checked assignment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// The duty was added to the assignment set.
    Assigned,
    /// The duty was already assigned; nothing changed.
    AlreadyAssigned,
    /// The duty clashes with an assigned duty; nothing changed.
    Rejected(Warning),
}

#[derive(Debug, Clone)]
pub struct Session {
    catalog: DutyCatalog,
    state: State,
    actor: Actor,
    audit_log: AuditLog,
}

impl Session {
    /// Starts a session with every duty unassigned.
    #[must_use]
    pub fn new(catalog: DutyCatalog, actor: Actor) -> Self {
        Self {
            catalog,
            state: State::new(),
            actor,
            audit_log: AuditLog::new(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &DutyCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub const fn audit_log(&self) -> &AuditLog {
        &self.audit_log
    }

    /// Builds the board for the current assignment state.
    #[must_use]
    pub fn board(&self) -> DutyBoard<'_> {
        DutyBoard::build(&self.catalog, &self.state.assigned)
    }

    /// The warning assigning `id` would raise right now.
    ///
    /// Returns `None` for duties that are already assigned or not in the catalog.
    #[must_use]
    pub fn warning_for(&self, id: DutyId) -> Option<Warning> {
        if self.state.assigned.contains(id) {
            return None;
        }
        let candidate: &Duty = self.catalog.get(id)?;
        let (assigned, _) = partition(&self.catalog, &self.state.assigned);
        find_warning(candidate, assigned)
    }

    /// Assigns `id` only if it raises no warning.
    ///
    /// The check and the mutation happen in one call, so no other change can
    /// slip in between them.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the catalog.
    pub fn request_assignment(&mut self, id: DutyId) -> Result<AssignmentOutcome, CoreError> {
        if !self.catalog.contains(id) {
            return Err(CoreError::DomainViolation(DomainError::DutyNotFound(id)));
        }
        if self.state.assigned.contains(id) {
            return Ok(AssignmentOutcome::AlreadyAssigned);
        }
        if let Some(warning) = self.warning_for(id) {
            warn!(duty_id = %id, %warning, "Rejected assignment");
            return Ok(AssignmentOutcome::Rejected(warning));
        }

        self.assign(id)?;
        Ok(AssignmentOutcome::Assigned)
    }

    /// Assigns `id` without checking for warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not in the catalog.
    pub fn assign(&mut self, id: DutyId) -> Result<&AuditEvent, CoreError> {
        let result: TransitionResult = apply(
            &self.catalog,
            &self.state,
            Command::Assign { duty_id: id },
            self.actor.clone(),
        )?;
        Ok(self.commit(result))
    }

    /// Unassigns `id`. Always succeeds; an id that is not assigned is a no-op.
    pub fn unassign(&mut self, id: DutyId) -> &AuditEvent {
        let result: TransitionResult = transition(
            &self.state,
            Command::Unassign { duty_id: id },
            self.actor.clone(),
        );
        self.commit(result)
    }

    fn commit(&mut self, result: TransitionResult) -> &AuditEvent {
        self.state = result.new_state;
        self.audit_log.record(result.audit_event);
        // record() just pushed, so the log is non-empty
        let events: &[AuditEvent] = self.audit_log.events();
        &events[events.len() - 1]
    }
}
