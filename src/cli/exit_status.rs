use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for the CLI.
///
/// - `Success` (0): Run completed, with or without warnings
/// - `Failure` (1): A key is redefined in a strings file
/// - `Error` (2): Run failed due to internal error (missing project root, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed. Warnings never change the exit status.
    Success,
    /// Run stopped on an error-severity issue.
    Failure,
    /// Run failed due to internal error.
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
