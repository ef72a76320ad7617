// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conflict classification for candidate duties.
//!
//! A candidate duty is checked against the duties already assigned.
//! Any assigned duty that falls within [`REST_MARGIN`] of the candidate
//! produces a [`Warning`].
//!
//! ## Invariants
//!
//! - Assigned duties are examined in the order given (chronological)
//! - The first assigned duty within the margin decides the warning
//! - A direct overlap is always reported as `Conflict`
//! - Touching endpoints are not an overlap, but still fall within the margin

use crate::types::{Duty, Interval};
use serde::{Deserialize, Serialize};
use time::Duration;

/// Minimum rest required between the end of one duty and the start of the next.
pub const REST_MARGIN: Duration = Duration::hours(8);

/// Why a duty cannot be cleanly assigned given the current assignments.
///
/// Each variant carries the name of the assigned duty it clashes with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Warning {
    /// The candidate overlaps an assigned duty.
    Conflict {
        /// The assigned duty's name.
        name: String,
    },
    /// The candidate ends too soon before an assigned duty starts.
    NoRestAfter {
        /// The assigned duty's name.
        name: String,
    },
    /// The candidate starts too soon after an assigned duty ends.
    NoRestBefore {
        /// The assigned duty's name.
        name: String,
    },
}

impl Warning {
    /// Returns the name of the assigned duty this warning refers to.
    #[must_use]
    pub fn conflicting_duty_name(&self) -> &str {
        match self {
            Self::Conflict { name } | Self::NoRestAfter { name } | Self::NoRestBefore { name } => {
                name
            }
        }
    }

    /// Returns a short machine-friendly tag for this warning.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Conflict { .. } => "conflict",
            Self::NoRestAfter { .. } => "noRestAfter",
            Self::NoRestBefore { .. } => "noRestBefore",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours: i64 = REST_MARGIN.whole_hours();
        match self {
            Self::Conflict { name } => {
                write!(f, "You have another duty at this time ({name})")
            }
            Self::NoRestAfter { name } => write!(f, "Less than {hours} hours until {name}"),
            Self::NoRestBefore { name } => write!(f, "Less than {hours} hours since {name}"),
        }
    }
}

/// Determines whether assigning `candidate` would clash with an assigned duty.
///
/// # Arguments
///
/// * `candidate` - The duty the user wants to take on
/// * `assigned_duties` - Currently assigned duties, in chronological order
///
/// # Returns
///
/// * `Some(Warning)` for the first assigned duty within the rest margin
/// * `None` if every assigned duty is at least [`REST_MARGIN`] away
///
/// # Classification
///
/// For the first assigned duty that overlaps the candidate widened by the
/// margin on both sides:
///
/// - overlaps the candidate itself: `Conflict`
/// - starts after the candidate ends: `NoRestAfter`
/// - otherwise (ended before the candidate starts): `NoRestBefore`
///
/// Later assigned duties are not examined, even if they would produce a
/// different classification.
pub fn find_warning<'a, I>(candidate: &Duty, assigned_duties: I) -> Option<Warning>
where
    I: IntoIterator<Item = &'a Duty>,
{
    let interval: Interval = candidate.interval();
    let expanded: Interval = interval.expanded(REST_MARGIN);

    assigned_duties
        .into_iter()
        .find(|assigned| assigned.interval().overlaps(&expanded))
        .map(|assigned| {
            let name: String = assigned.name().to_string();
            if assigned.interval().overlaps(&interval) {
                Warning::Conflict { name }
            } else if candidate.end() < assigned.start() {
                Warning::NoRestAfter { name }
            } else {
                Warning::NoRestBefore { name }
            }
        })
}
