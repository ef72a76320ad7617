// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duty_signup::CoreError;
use duty_signup_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read duty file {}: {source}", path.display())]
    ReadDuties {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Duty file is not a valid duty list: {0}")]
    ParseDuties(#[source] serde_json::Error),

    #[error("Invalid duty record: {0}")]
    InvalidDuty(#[from] DomainError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to format timestamp: {0}")]
    FormatTimestamp(#[from] time::error::Format),

    #[error("Failed to render report: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("Failed to serialize report: {0}")]
    SerializeReport(#[source] serde_json::Error),
}
