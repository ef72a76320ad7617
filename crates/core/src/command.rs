// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duty_signup_audit::Action;
use duty_signup_domain::DutyId;

/// A command represents user intent as data only.
///
/// Commands are the only way to change the assignment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Take on a duty.
    Assign {
        /// The duty to assign.
        duty_id: DutyId,
    },
    /// Give up a duty.
    Unassign {
        /// The duty to unassign.
        duty_id: DutyId,
    },
}

impl Command {
    /// The duty this command targets.
    #[must_use]
    pub const fn duty_id(&self) -> DutyId {
        match self {
            Self::Assign { duty_id } | Self::Unassign { duty_id } => *duty_id,
        }
    }

    /// The audit action recorded when this command is applied.
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::Assign { .. } => Action::AssignDuty,
            Self::Unassign { .. } => Action::UnassignDuty,
        }
    }
}
