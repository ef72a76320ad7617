// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod load;
mod plan;
mod report;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use duty_signup::Session;
use duty_signup_audit::Actor;
use duty_signup_domain::{DutyCatalog, DutyId};
use error::CliError;
use plan::{Plan, Rejection};
use report::Report;
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Duty sign-up - pick shifts without breaking the rest rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    /// JSON file with the duty list (`[{id, depot, name, start, end}, ...]`)
    duties: PathBuf,

    /// Duty id to sign up for. Repeatable; applied in order.
    #[arg(short, long, value_name = "ID")]
    assign: Vec<i64>,

    /// Duty id to give up. Repeatable; applied after all assignments.
    #[arg(short, long, value_name = "ID")]
    unassign: Vec<i64>,

    /// Sign up even when a duty has a warning
    #[arg(long)]
    force: bool,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Name recorded in the audit trail
    #[arg(long, default_value = "cli")]
    actor: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn plan(&self) -> Plan {
        Plan {
            assign: self.assign.iter().copied().map(DutyId::new).collect(),
            unassign: self.unassign.iter().copied().map(DutyId::new).collect(),
            force: self.force,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let catalog: DutyCatalog = load::load_catalog(&args.duties)?;
    info!(
        duties = catalog.len(),
        path = %args.duties.display(),
        "Loaded duty catalog"
    );

    let mut session: Session = Session::new(catalog, Actor::new(&args.actor));
    let rejected: Vec<Rejection> = args.plan().apply(&mut session)?;

    let report: Report<'_> = Report::new(&session, rejected);
    let output: String = if args.json {
        report.to_json()?
    } else {
        report.render_text()?
    };
    print!("{output}");
    if args.json {
        println!();
    }

    Ok(())
}
