// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CliError;
use crate::plan::Rejection;
use duty_signup::{DutyBoard, Session};
use duty_signup_audit::AuditLog;
use duty_signup_domain::Duty;
use serde::Serialize;
use std::fmt::Write;
use time::macros::format_description;

/// The final state of a session, ready to print.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub board: DutyBoard<'a>,
    pub rejected: Vec<Rejection>,
    pub audit: &'a AuditLog,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(session: &'a Session, rejected: Vec<Rejection>) -> Self {
        Self {
            board: session.board(),
            rejected,
            audit: session.audit_log(),
        }
    }

    pub fn to_json(&self) -> Result<String, CliError> {
        serde_json::to_string_pretty(self).map_err(CliError::SerializeReport)
    }

    /// Renders the board as plain text, one duty per line.
    pub fn render_text(&self) -> Result<String, CliError> {
        let mut out: String = String::new();

        writeln!(out, "Available duties")?;
        if self.board.unassigned.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for duty in &self.board.unassigned {
            write!(out, "  {}", duty_line(duty)?)?;
            if let Some(warning) = self.board.warning_for(duty.id()) {
                write!(out, "  ! {warning}")?;
            }
            writeln!(out)?;
        }

        writeln!(out, "Duties you've signed up for")?;
        if self.board.assigned.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for duty in &self.board.assigned {
            writeln!(out, "  {}", duty_line(duty)?)?;
        }

        if !self.rejected.is_empty() {
            writeln!(out, "Not signed up")?;
            for rejection in &self.rejected {
                writeln!(
                    out,
                    "  [{}] You can't sign up for this duty. {}",
                    rejection.duty_id, rejection.warning
                )?;
            }
        }

        Ok(out)
    }
}

fn duty_line(duty: &Duty) -> Result<String, CliError> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    Ok(format!(
        "[{}] {} ({}) {} - {}",
        duty.id(),
        duty.name(),
        duty.depot(),
        duty.start().format(format)?,
        duty.end().format(format)?,
    ))
}
