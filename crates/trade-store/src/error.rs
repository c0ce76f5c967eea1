//! Error types for trade store access.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database file '{path}' not found")]
    DatabaseNotFound { path: PathBuf },

    #[error("failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("at least one filter must be specified (date, country, or product)")]
    NoFilter,

    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
