//! Error types for indicator export.

use std::path::PathBuf;
use thiserror::Error;

use crate::format::ExportFormat;

/// Errors that can occur while writing exported tables.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating a directory or file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a CSV record failed.
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// The requested format has no writer in this build.
    #[error("{format} export is not available: {remediation}")]
    SinkUnavailable {
        format: ExportFormat,
        remediation: String,
    },

    /// The export format name is not recognized.
    #[error("unknown export format '{0}'; expected csv or xlsx")]
    UnknownFormat(String),
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, OutputError>;
