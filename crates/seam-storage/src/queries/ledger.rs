//! Queries for the migrations ledger — one row per applied migration.

use rusqlite::{params, Connection};
use seam_core::errors::StorageError;
use seam_core::Migration;

/// A row in the migrations ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub id: u32,
    pub title: String,
    pub md5_sum: String,
}

/// Record a migration as applied. A duplicate id, title or checksum
/// violates a UNIQUE constraint and surfaces as a SQLite error; the
/// ledger never silently overwrites.
pub fn insert(conn: &Connection, migration: &Migration) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO migrations (id, title, md5_sum) VALUES (?1, ?2, ?3)",
        params![migration.id, migration.title, migration.checksum],
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    Ok(())
}

/// All recorded migrations, ascending id order.
pub fn all(conn: &Connection) -> Result<Vec<LedgerRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT id, title, md5_sum FROM migrations ORDER BY id")
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(LedgerRow {
                id: row.get(0)?,
                title: row.get(1)?,
                md5_sum: row.get(2)?,
            })
        })
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    Ok(rows)
}

/// Number of recorded migrations.
pub fn count(conn: &Connection) -> Result<usize, StorageError> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(n as usize)
}
