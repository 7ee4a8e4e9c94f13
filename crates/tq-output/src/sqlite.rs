//! SQLite results backend (feature `sqlite`).
//!
//! Creates (or reuses) `path` with one table, `experiment_points`.
//! Undefined comparisons are stored as `NULL`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ResultWriter;
use crate::{OutputResult, ResultRow};

/// Writes experiment rows to an SQLite database.
pub struct SqliteResultWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteResultWriter {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS experiment_points (
                 lambda            REAL NOT NULL,
                 mu1               REAL NOT NULL,
                 mu2               REAL NOT NULL,
                 horizon           REAL NOT NULL,
                 average_customers REAL NOT NULL,
                 theoretical_value REAL,
                 error_percent     REAL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ResultWriter for SqliteResultWriter {
    fn write_result(&mut self, row: &ResultRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO experiment_points \
             (lambda, mu1, mu2, horizon, average_customers, theoretical_value, error_percent) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        stmt.execute(rusqlite::params![
            row.lambda,
            row.mu1,
            row.mu2,
            row.horizon,
            row.average_customers,
            row.theoretical_value,
            row.error_percent,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
