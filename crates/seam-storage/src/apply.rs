//! Apply engine: bring the database up to date with the discovered set.
//!
//! Recorded migrations are verified against the files on disk; new
//! migrations run inside one transaction each, ascending id order,
//! stopping at the first failure. A migration that already committed
//! stays committed.

use std::collections::HashMap;

use rusqlite::Connection;
use seam_core::errors::StorageError;
use seam_core::Migration;

use crate::queries::ledger::{self, LedgerRow};

/// Outcome of a [`sync`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Migrations executed and recorded during this run.
    pub applied: usize,
    /// Migrations already in the ledger with a matching checksum.
    pub already_applied: usize,
}

/// Compare the discovered migrations against the ledger and apply the
/// ones not yet recorded.
///
/// A recorded id whose on-disk checksum differs aborts the run: the
/// file was edited after it was applied, and re-applying or ignoring
/// it would both be wrong. A recorded id with no file on disk is
/// logged and left alone; the ledger is append-only history.
pub fn sync(conn: &mut Connection, migrations: &[Migration]) -> Result<ApplyReport, StorageError> {
    let recorded: HashMap<u32, LedgerRow> = ledger::all(conn)?
        .into_iter()
        .map(|row| (row.id, row))
        .collect();

    for row in recorded.values() {
        if !migrations.iter().any(|m| m.id == row.id) {
            tracing::warn!(id = row.id, title = %row.title, "recorded migration has no file on disk");
        }
    }

    let mut ordered: Vec<&Migration> = migrations.iter().collect();
    ordered.sort_by_key(|m| m.id);

    let mut report = ApplyReport::default();
    for migration in ordered {
        match recorded.get(&migration.id) {
            Some(row) if row.md5_sum == migration.checksum => {
                if row.title != migration.title {
                    tracing::warn!(
                        id = migration.id,
                        recorded = %row.title,
                        actual = %migration.title,
                        "recorded migration was renamed on disk"
                    );
                }
                report.already_applied += 1;
            }
            Some(row) => {
                return Err(StorageError::ChecksumMismatch {
                    id: migration.id,
                    recorded: row.md5_sum.clone(),
                    actual: migration.checksum.clone(),
                });
            }
            None => {
                apply_one(conn, migration)?;
                report.applied += 1;
            }
        }
    }

    tracing::info!(
        applied = report.applied,
        already_applied = report.already_applied,
        "ledger sync complete"
    );
    Ok(report)
}

/// Execute one migration and record it, atomically. The transaction
/// rolls back on drop if the SQL or the ledger insert fails.
fn apply_one(conn: &mut Connection, migration: &Migration) -> Result<(), StorageError> {
    let tx = conn.transaction().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;

    tx.execute_batch(&migration.content)
        .map_err(|e| StorageError::SqliteError {
            message: format!("migration {} failed: {e}", migration.id),
        })?;
    ledger::insert(&tx, migration)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;

    tracing::info!(id = migration.id, title = %migration.title, "applied migration");
    Ok(())
}
