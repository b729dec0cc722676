//! Command-line interface layer.
//!
//! Parses arguments, runs the check and prints the report. The exit status
//! is decided here, never inside the core.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Printed when no project directory is given. Not an error.
pub const MISSING_PROJECT_DIR: &str = "PROJECT DIR argument not found";

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(project_dir) = args.project_dir.clone() else {
        println!("{}", MISSING_PROJECT_DIR);
        return Ok(ExitStatus::Success.into());
    };

    let result = commands::check::check(&args, &project_dir)?;
    report::print(&result, args.grouped, args.verbose);

    Ok(ExitStatus::from_result(&result).into())
}
