//! Read access to the trade transaction database.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rusqlite::{Connection, OpenFlags, params_from_iter};
use tracing::{debug, info};
use trade_model::TradeRecord;

use crate::decode::record_from_row;
use crate::error::{Result, StoreError};
use crate::filter::TradeFilter;

/// Read-only handle on a trade database.
pub struct TradeStore {
    path: PathBuf,
    connection: Connection,
}

impl TradeStore {
    /// Opens an existing database file read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(StoreError::DatabaseNotFound { path });
        }
        debug!(path = %path.display(), "opening trade database");
        let connection = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| StoreError::Open {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, connection })
    }

    /// Wraps an already open connection.
    pub fn from_connection(connection: Connection) -> Self {
        let path = connection
            .path()
            .filter(|p| !p.is_empty())
            .map_or_else(|| PathBuf::from(":memory:"), PathBuf::from);
        Self { path, connection }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetches all records matching `filter`.
    ///
    /// An empty filter is refused rather than dumping the whole table.
    pub fn fetch(&self, filter: &TradeFilter) -> Result<Vec<TradeRecord>> {
        if filter.is_empty() {
            return Err(StoreError::NoFilter);
        }
        let (sql, params) = filter.to_sql();
        debug!(sql = %sql, params = params.len(), "running trade query");

        let start = Instant::now();
        let mut statement = self.connection.prepare(&sql)?;
        let records = statement
            .query_map(params_from_iter(params.iter()), record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        info!(
            records = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "trade query complete"
        );
        Ok(records)
    }
}
