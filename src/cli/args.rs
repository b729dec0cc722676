//! CLI argument definitions using clap.
//!
//! The positional order is fixed: project directory, localization function,
//! variable names, ignored file names. Every positional is optional at the
//! parser level; a missing project directory is handled by `run_cli`.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root directory to scan
    pub project_dir: Option<PathBuf>,

    /// Localization function name (overrides config file) [default: NSLocalizedString]
    pub function: Option<String>,

    /// Comma-separated variable names whose string assignments are keys
    pub variables: Option<String>,

    /// Comma-separated file names to skip when looking for usages
    pub ignore_files: Option<String>,

    /// Report each key once with its language list
    #[arg(long)]
    pub grouped: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
