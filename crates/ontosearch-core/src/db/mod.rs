//! SQLite corpus database
//!
//! The corpus is produced by an external ingestion step; this module reads
//! it for search and offers a small write API used by `init` and tests.

mod schema;
mod series;
mod stats;
mod terms;

use std::path::Path;

use rusqlite::Connection;

use crate::error::{OntoError, Result};
use crate::map_db_err;

pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};
pub use stats::CorpusStats;

/// SQLite database holding ontology terms and GEO series
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an existing corpus database.
    ///
    /// Fails with `CorpusNotFound` when `path` does not exist; the file is
    /// never created here.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OntoError::CorpusNotFound {
                path: path.to_path_buf(),
            });
        }

        let conn = Connection::open(path).map_err(|e| {
            OntoError::Other(format!(
                "failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;

        let db = Database { conn };
        tracing::debug!(schema_version = ?db.schema_version(), "opened corpus");
        Ok(db)
    }

    /// Create (or top up) a corpus database at `path` with the current schema
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path).map_err(|e| {
            OntoError::Other(format!(
                "failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| map_db_err!("enable WAL mode", e))?;

        Self::with_schema(conn)
    }

    /// A fresh in-memory database with the current schema
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| map_db_err!("open database", e))?;
        Self::with_schema(conn)
    }

    fn with_schema(conn: Connection) -> Result<Self> {
        let result = create_schema(&conn).map_err(|e| map_db_err!("create database schema", e))?;
        tracing::debug!(?result, "schema ready");
        Ok(Database { conn })
    }

    /// Stored schema version, `None` for corpora built without metadata
    pub fn schema_version(&self) -> Option<i32> {
        schema::stored_schema_version(&self.conn)
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Flush WAL so the next process sees a complete file
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}
