use std::process::ExitCode;

/// Exit status for the binstubs CLI.
///
/// - `Success` (0): Imports were found and processed
/// - `Failure` (1): Nothing to do (no imports found, config already exists)
/// - `Error` (2): Generation aborted (I/O error, bad directive, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Imports were found and every binstub was written or skipped.
    Success,
    /// The command ran but had nothing to do.
    Failure,
    /// The command aborted on an error.
    Error,
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
