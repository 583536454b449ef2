use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary};

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and at least one language was reported
/// - `Failure` (1): Command completed but no language reached the threshold,
///   or `init` found an existing config
/// - `Error` (2): Command failed (invalid catalog, unreadable directory, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but had nothing to report.
    Failure,
    /// Command failed due to an error.
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        match &result.summary {
            CommandSummary::Scan(report) if report.languages.is_empty() => ExitStatus::Failure,
            CommandSummary::Init(summary) if summary.error.is_some() => ExitStatus::Failure,
            _ => ExitStatus::Success,
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
