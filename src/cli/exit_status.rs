use std::process::ExitCode;

/// Process outcome of a command.
///
/// `check` fails only on the health score: diagnostics alone never change the exit code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Score at or above the threshold, or a non-check command succeeded.
    Success,
    /// Score below the threshold, or `init` found an existing config.
    Failure,
    /// Invalid configuration or another internal error.
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
