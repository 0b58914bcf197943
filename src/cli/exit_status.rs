use std::process::ExitCode;

/// Exit status of a bannerdoc run.
///
/// - `Success` (0): Run completed, documents written (possibly none)
/// - `Usage` (1): Invalid input, nothing was touched
/// - `Error` (2): I/O failure; output written before the failure is kept
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed.
    Success,
    /// Invalid entry path or configuration.
    Usage,
    /// Run aborted by an I/O failure.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Usage => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

impl From<&anyhow::Error> for ExitStatus {
    fn from(err: &anyhow::Error) -> Self {
        if crate::error::as_usage_error(err).is_some() {
            ExitStatus::Usage
        } else {
            ExitStatus::Error
        }
    }
}
