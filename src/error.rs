//! Typed errors for invalid user input.
//!
//! Filesystem faults travel as plain `anyhow::Error` with path context.
//! Usage errors get their own type so `main` can tell them apart and pick
//! the right exit status.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Please provide an entry path.")]
    MissingEntryPath,

    #[error(
        "Cannot process the current directory ('{}'). Please specify a valid entry path.",
        .0.display()
    )]
    CurrentDirectoryEntry(PathBuf),

    #[error(
        "Entry path '{}' lies inside the output directory '{}', which is cleared before every run",
        .entry.display(),
        .output.display()
    )]
    EntryInsideOutput { entry: PathBuf, output: PathBuf },

    #[error("Invalid glob pattern in 'ignores': \"{pattern}\"")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Output file name must not be empty")]
    EmptyOutputFile,
}

/// Returns the usage error carried by `err`, if any.
pub fn as_usage_error(err: &anyhow::Error) -> Option<&UsageError> {
    err.chain().find_map(|cause| cause.downcast_ref::<UsageError>())
}
