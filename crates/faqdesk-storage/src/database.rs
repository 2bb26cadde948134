// SPDX-FileCopyrightText: 2026 Faqdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread: `Database` wraps a single `tokio_rusqlite::Connection`, query
//! modules accept `&Database` and go through `connection().call()`, and
//! no additional connections are ever created for writes. This eliminates
//! SQLITE_BUSY errors under concurrent access.

use std::path::Path;

use faqdesk_core::FaqdeskError;
use tracing::debug;

use crate::migrations;

/// Handle to the SQLite database. Cheap to clone; all clones share the
/// single writer thread.
#[derive(Clone)]
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path`, apply pragmas, and run all
    /// pending migrations.
    pub async fn open(path: &str) -> Result<Self, FaqdeskError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| FaqdeskError::Storage {
                    source: Box::new(e),
                })?;
            }
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| FaqdeskError::Storage {
                source: Box::new(e),
            })?;

        conn.call(|conn| -> Result<(), FaqdeskError> {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 PRAGMA synchronous = NORMAL;
                 PRAGMA foreign_keys = ON;
                 PRAGMA busy_timeout = 5000;",
            )
            .map_err(|e| FaqdeskError::Storage {
                source: Box::new(e),
            })?;
            migrations::run_migrations(conn).map_err(|e| FaqdeskError::Storage {
                source: Box::new(e),
            })?;
            Ok(())
        })
        .await
        .map_err(|e| FaqdeskError::Storage {
            source: Box::new(e),
        })?;

        debug!(path, "database opened");
        Ok(Self { conn })
    }

    /// Access the underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(&self) -> Result<(), FaqdeskError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("database closed: WAL checkpoint complete");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the workspace storage error.
pub fn map_tr_err(e: tokio_rusqlite::Error) -> FaqdeskError {
    FaqdeskError::Storage {
        source: Box::new(e),
    }
}

/// Current UTC timestamp in the ISO-8601 millisecond format the schema
/// defaults use (`strftime('%Y-%m-%dT%H:%M:%fZ')`).
pub fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_database_and_schema() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();

        // All four tables exist after migration.
        let count: i64 = db
            .connection()
            .call(|conn| {
                let n = conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
                     AND name IN ('faqs', 'conversations', 'turns', 'tickets')",
                    [],
                    |row| row.get(0),
                )?;
                Ok::<i64, rusqlite::Error>(n)
            })
            .await
            .unwrap();
        assert_eq!(count, 4);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested/dirs/test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        assert!(db_path.exists());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();

        // Migrations must not fail on an already-migrated database.
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        db.close().await.unwrap();
    }

    #[test]
    fn now_timestamp_matches_schema_format() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "2026-01-01T00:00:00.000Z".len());
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
    }
}
