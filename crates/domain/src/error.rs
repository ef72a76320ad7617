// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::DutyId;

/// Errors that can occur while building or querying the duty catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A duty timestamp could not be parsed.
    InvalidTimestamp {
        /// The raw timestamp string.
        value: String,
        /// The parser's explanation.
        reason: String,
    },
    /// The duty id does not exist in the catalog.
    DutyNotFound(DutyId),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimestamp { value, reason } => {
                write!(f, "Failed to parse timestamp '{value}': {reason}")
            }
            Self::DutyNotFound(id) => write!(f, "Duty {id} not found in catalog"),
        }
    }
}

impl std::error::Error for DomainError {}
