// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CliError;
use duty_signup_domain::{DutyCatalog, DutyRecord};
use std::fs;
use std::path::Path;

/// Reads a JSON array of duty records from `path`.
pub fn load_catalog(path: &Path) -> Result<DutyCatalog, CliError> {
    let contents: String = fs::read_to_string(path).map_err(|source| CliError::ReadDuties {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&contents)
}

/// Parses a JSON array of duty records.
pub fn parse_catalog(json: &str) -> Result<DutyCatalog, CliError> {
    let records: Vec<DutyRecord> = serde_json::from_str(json).map_err(CliError::ParseDuties)?;
    Ok(DutyCatalog::from_records(records)?)
}
