//! Connection management: one write connection per run.

use std::time::Duration;

use rusqlite::Connection;
use seam_core::errors::StorageError;

/// Open the ledger database at the given DSN and apply pragmas.
///
/// The connection is plain owned state; dropping it at the end of the
/// run releases it on every exit path.
pub fn open(dsn: &str) -> Result<Connection, StorageError> {
    let conn = Connection::open(dsn).map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    apply_pragmas(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing).
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    apply_pragmas(&conn)?;
    Ok(conn)
}

fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    // Another process may hold the ledger briefly; wait instead of
    // failing on SQLITE_BUSY.
    conn.busy_timeout(Duration::from_secs(5))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(())
}
