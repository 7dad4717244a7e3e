//! Local persistence layer.
//!
//! Two independent collections (saved prescriptions, workplaces), each
//! serialized as a single JSON blob under its own key in a SQLite
//! key/value table. All operations are read-modify-write from one thread;
//! last-writer-wins is the accepted policy. Reads never fail outward;
//! a corrupt blob degrades to an empty collection with a warning.

mod prescriptions;
mod schema;
mod workplaces;

pub use schema::*;

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Persistence errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("a workplace named \"{0}\" already exists")]
    DuplicateWorkplace(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Blob key for the saved-prescriptions collection.
pub(crate) const PRESCRIPTIONS_KEY: &str = "receituario_prescriptions_local";

/// Blob key for the workplaces collection.
pub(crate) const WORKPLACES_KEY: &str = "receituario_workplaces_local";

/// Local store connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Read a collection blob, degrading to empty on any failure.
    pub(crate) fn read_blob<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw: Option<String> = match self
            .conn
            .query_row("SELECT value FROM local_store WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()
        {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read local store blob");
                return Vec::new();
            }
        };

        let Some(raw) = raw else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key, error = %e, "corrupt local store blob, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize and write a collection blob under its key.
    pub(crate) fn write_blob<T: Serialize>(&self, key: &str, records: &[T]) -> DbResult<()> {
        let blob = serde_json::to_string(records)?;
        put_blob(&self.conn, key, &blob)
    }

    pub(crate) fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

/// Upsert a raw blob; shared by direct writes and transactions.
pub(crate) fn put_blob(conn: &Connection, key: &str, blob: &str) -> DbResult<()> {
    conn.execute(
        r#"
        INSERT INTO local_store (key, value, updated_at)
        VALUES (?1, ?2, datetime('now'))
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        params![key, blob],
    )?;
    Ok(())
}
