//! Error types for reference-data loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading reference code files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reference file does not exist.
    #[error("reference file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required column not found in the CSV header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Failed to parse JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IngestError {
    pub(crate) fn open(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
