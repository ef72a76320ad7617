// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_day_duty, create_test_catalog, create_test_session, ids};
use crate::{AssignmentOutcome, CoreError, DutyBoard, Session};
use duty_signup_audit::{Action, AuditEvent};
use duty_signup_domain::{DomainError, DutyCatalog, DutyId, Warning};

fn create_overlap_session() -> Session {
    create_test_session(DutyCatalog::new(vec![
        create_day_duty(1, "A", 9.0, 13.0),
        create_day_duty(2, "Same time", 9.5, 12.0),
    ]))
}

#[test]
fn test_session_starts_with_everything_unassigned() {
    let session: Session = create_test_session(create_test_catalog());
    let board: DutyBoard<'_> = session.board();

    assert!(board.assigned.is_empty());
    assert_eq!(board.unassigned.len(), 3);
    assert!(session.state().assigned.is_empty());
    assert!(session.audit_log().is_empty());
}

#[test]
fn test_assign_moves_exactly_one_duty() {
    let mut session: Session = create_test_session(create_test_catalog());

    session.assign(DutyId::new(2)).unwrap();
    let board: DutyBoard<'_> = session.board();

    assert_eq!(ids(&board.assigned), vec![2]);
    assert_eq!(ids(&board.unassigned), vec![1, 3]);
    assert_eq!(board.assigned.len() + board.unassigned.len(), 3);
}

#[test]
fn test_unassign_moves_duty_back() {
    let mut session: Session = create_test_session(create_test_catalog());
    session.assign(DutyId::new(2)).unwrap();

    let event: &AuditEvent = session.unassign(DutyId::new(2));
    assert_eq!(event.action, Action::UnassignDuty);
    assert!(!event.is_noop());

    let board: DutyBoard<'_> = session.board();
    assert!(board.assigned.is_empty());
    assert_eq!(board.unassigned.len(), 3);
}

#[test]
fn test_unassign_unassigned_id_is_noop() {
    let mut session: Session = create_test_session(create_test_catalog());
    session.assign(DutyId::new(1)).unwrap();

    assert!(session.unassign(DutyId::new(3)).is_noop());
    assert!(session.unassign(DutyId::new(500)).is_noop());

    assert_eq!(session.state().assigned.len(), 1);
    assert_eq!(session.audit_log().len(), 3);
}

#[test]
fn test_assign_unknown_id_is_rejected_without_audit() {
    let mut session: Session = create_test_session(create_test_catalog());

    let result: Result<&AuditEvent, CoreError> = session.assign(DutyId::new(99));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DutyNotFound(
            DutyId::new(99)
        )))
    );
    assert!(session.state().assigned.is_empty());
    assert!(session.audit_log().is_empty());
}

#[test]
fn test_unchecked_assign_accepts_conflicting_duty() {
    let mut session: Session = create_overlap_session();
    session.assign(DutyId::new(1)).unwrap();

    assert!(session.warning_for(DutyId::new(2)).is_some());
    session.assign(DutyId::new(2)).unwrap();

    assert_eq!(session.state().assigned.len(), 2);
}

#[test]
fn test_request_assignment_rejects_conflict() {
    let mut session: Session = create_overlap_session();
    assert_eq!(
        session.request_assignment(DutyId::new(1)),
        Ok(AssignmentOutcome::Assigned)
    );

    let outcome: Result<AssignmentOutcome, CoreError> =
        session.request_assignment(DutyId::new(2));

    assert_eq!(
        outcome,
        Ok(AssignmentOutcome::Rejected(Warning::Conflict {
            name: String::from("A")
        }))
    );
    assert_eq!(session.state().assigned.len(), 1);
    assert_eq!(session.audit_log().len(), 1);
}

#[test]
fn test_request_assignment_of_assigned_duty() {
    let mut session: Session = create_test_session(create_test_catalog());
    session.request_assignment(DutyId::new(1)).unwrap();

    assert_eq!(
        session.request_assignment(DutyId::new(1)),
        Ok(AssignmentOutcome::AlreadyAssigned)
    );
    assert_eq!(session.audit_log().len(), 1);
}

#[test]
fn test_request_assignment_unknown_id() {
    let mut session: Session = create_test_session(create_test_catalog());

    assert_eq!(
        session.request_assignment(DutyId::new(42)),
        Err(CoreError::DomainViolation(DomainError::DutyNotFound(
            DutyId::new(42)
        )))
    );
}

#[test]
fn test_warning_for_assigned_or_unknown_duty_is_none() {
    let mut session: Session = create_overlap_session();
    session.assign(DutyId::new(1)).unwrap();

    assert_eq!(session.warning_for(DutyId::new(1)), None);
    assert_eq!(session.warning_for(DutyId::new(42)), None);
}

#[test]
fn test_audit_log_tracks_session_history() {
    let mut session: Session = create_test_session(create_test_catalog());

    session.assign(DutyId::new(1)).unwrap();
    session.assign(DutyId::new(3)).unwrap();
    session.unassign(DutyId::new(1));

    let actions: Vec<Action> = session
        .audit_log()
        .events()
        .iter()
        .map(|event| event.action)
        .collect();
    assert_eq!(
        actions,
        vec![Action::AssignDuty, Action::AssignDuty, Action::UnassignDuty]
    );
    assert_eq!(session.audit_log().events()[2].after.data, "assigned=[3]");
    assert_eq!(session.audit_log().for_duty(DutyId::new(1)).count(), 2);
}
