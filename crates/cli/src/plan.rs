// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Replays the assign/unassign requests given on the command line.

use duty_signup::{AssignmentOutcome, CoreError, Session};
use duty_signup_domain::{DutyId, Warning};
use serde::Serialize;
use tracing::{info, warn};

/// An assignment request refused because of a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub duty_id: DutyId,
    pub warning: Warning,
}

/// The requests to replay against a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub assign: Vec<DutyId>,
    pub unassign: Vec<DutyId>,
    /// Assign even when a warning is present.
    pub force: bool,
}

impl Plan {
    /// Applies all assigns in order, then all unassigns.
    ///
    /// Returns the assignments that were refused. With `force`, nothing is
    /// refused and warnings are only logged.
    pub fn apply(&self, session: &mut Session) -> Result<Vec<Rejection>, CoreError> {
        let mut rejected: Vec<Rejection> = Vec::new();

        for &duty_id in &self.assign {
            if self.force {
                if let Some(warning) = session.warning_for(duty_id) {
                    warn!(duty_id = %duty_id, %warning, "Assigning despite warning");
                }
                session.assign(duty_id)?;
                continue;
            }

            match session.request_assignment(duty_id)? {
                AssignmentOutcome::Assigned => {}
                AssignmentOutcome::AlreadyAssigned => {
                    info!(duty_id = %duty_id, "Duty already assigned");
                }
                AssignmentOutcome::Rejected(warning) => {
                    rejected.push(Rejection { duty_id, warning });
                }
            }
        }

        for &duty_id in &self.unassign {
            session.unassign(duty_id);
        }

        Ok(rejected)
    }
}
