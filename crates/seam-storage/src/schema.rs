//! Ledger schema.
//!
//! Column names and UNIQUE constraints are load-bearing: deployed
//! databases already hold rows in this exact shape, so `id`, `title`
//! and `md5_sum` must not be renamed.

use rusqlite::Connection;
use seam_core::errors::StorageError;

pub const LEDGER_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS "migrations" (
  "id"      INTEGER NOT NULL PRIMARY KEY UNIQUE,
  "title"   TEXT NOT NULL UNIQUE,
  "md5_sum" TEXT NOT NULL UNIQUE
)
"#;

/// Create the ledger table if it does not exist yet. Safe to run on
/// every startup.
pub fn ensure_ledger(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(LEDGER_SQL)
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}
