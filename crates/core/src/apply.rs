// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use duty_signup_audit::{Actor, AuditEvent, StateSnapshot};
use duty_signup_domain::{DomainError, DutyCatalog, DutyId};
use tracing::{debug, info};

/// Applies a command to the current state, producing a new state and audit event.
///
/// Assignment is advisory: `Assign` does not check for warnings. Callers that
/// need the rest rules enforced should check first, or go through
/// [`crate::Session::request_assignment`].
///
/// # Arguments
///
/// * `catalog` - The session's duty catalog (for validation)
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if an `Assign` command names a duty that is not in the catalog.
/// `Unassign` never fails; unassigning an absent id is a no-op transition.
pub fn apply(
    catalog: &DutyCatalog,
    state: &State,
    command: Command,
    actor: Actor,
) -> Result<TransitionResult, CoreError> {
    if matches!(command, Command::Assign { .. }) && !catalog.contains(command.duty_id()) {
        return Err(CoreError::DomainViolation(DomainError::DutyNotFound(
            command.duty_id(),
        )));
    }

    Ok(transition(state, command, actor))
}

/// Performs an already-validated transition.
pub(crate) fn transition(state: &State, command: Command, actor: Actor) -> TransitionResult {
    let duty_id: DutyId = command.duty_id();

    let mut new_state: State = state.clone();
    let changed: bool = match command {
        Command::Assign { .. } => new_state.assigned.assign(duty_id),
        Command::Unassign { .. } => new_state.assigned.unassign(duty_id),
    };

    if changed {
        info!(action = %command.action(), duty_id = %duty_id, "Applied assignment change");
    } else {
        debug!(action = %command.action(), duty_id = %duty_id, "Assignment already in requested state");
    }

    let before: StateSnapshot = state.to_snapshot();
    let after: StateSnapshot = new_state.to_snapshot();
    let audit_event: AuditEvent = AuditEvent::new(actor, command.action(), duty_id, before, after);

    TransitionResult {
        new_state,
        audit_event,
    }
}
