//! Error types for settings export.

use std::path::PathBuf;

use mts_normalize::NormalizeError;
use thiserror::Error;

/// Errors that can occur while exporting a case.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No case was supplied to export from.
    #[error("no case available: a case must be open to export batch load settings")]
    MissingSource,

    /// A batch load could not be normalized.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize settings as JSON.
    #[error("failed to serialize JSON for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write a CSV record.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
