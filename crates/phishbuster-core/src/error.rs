//! Sample loading error types.
//!
//! Load failures are fatal at startup; nothing here is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a sample file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// One or more required columns are absent from the header row.
    #[error("sample file is missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// No row survived label normalization.
    #[error("sample file has no rows labeled 'phish' or 'safe'")]
    Empty,

    /// The file could not be opened or read.
    #[error("failed to read sample file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV itself is malformed.
    #[error("malformed sample file: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    /// Returns `true` for schema problems (as opposed to I/O or syntax).
    pub fn is_schema(&self) -> bool {
        matches!(self, LoadError::MissingColumns { .. })
    }
}
