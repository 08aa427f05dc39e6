//! Tests for the migrations ledger: insert, query, uniqueness constraints.

use rusqlite::Connection;
use seam_core::checksum::content_checksum;
use seam_core::errors::StorageError;
use seam_core::Migration;
use seam_storage::queries::ledger;
use seam_storage::{connection, schema};

fn setup_db() -> Connection {
    let conn = connection::open_in_memory().unwrap();
    schema::ensure_ledger(&conn).unwrap();
    conn
}

fn migration(id: u32, title: &str, content: &str) -> Migration {
    Migration {
        id,
        title: title.to_string(),
        checksum: content_checksum(content.as_bytes()),
        content: content.to_string(),
    }
}

fn assert_unique_violation(err: StorageError) {
    match err {
        StorageError::SqliteError { message } => {
            assert!(message.contains("UNIQUE"), "unexpected message: {message}");
        }
        other => panic!("expected SqliteError, got {other:?}"),
    }
}

#[test]
fn insert_and_query_roundtrip() {
    let conn = setup_db();
    ledger::insert(&conn, &migration(2, "add_index", "CREATE INDEX i ON t(x);")).unwrap();
    ledger::insert(&conn, &migration(1, "create_t", "CREATE TABLE t(x);")).unwrap();

    let rows = ledger::all(&conn).unwrap();
    assert_eq!(rows.len(), 2);
    // Ascending id order regardless of insert order.
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].title, "create_t");
    assert_eq!(rows[0].md5_sum, "6195bfaba2a0ebbeba1f6191fa861827");
    assert_eq!(rows[1].id, 2);
    assert_eq!(ledger::count(&conn).unwrap(), 2);
}

#[test]
fn ensure_ledger_is_idempotent() {
    let conn = setup_db();
    ledger::insert(&conn, &migration(1, "first", "SELECT 1;")).unwrap();

    // A second startup must not touch existing rows.
    schema::ensure_ledger(&conn).unwrap();
    assert_eq!(ledger::count(&conn).unwrap(), 1);
}

#[test]
fn duplicate_id_is_rejected() {
    let conn = setup_db();
    ledger::insert(&conn, &migration(1, "first", "SELECT 1;")).unwrap();

    let err = ledger::insert(&conn, &migration(1, "other", "SELECT 2;")).unwrap_err();
    assert_unique_violation(err);
    assert_eq!(ledger::count(&conn).unwrap(), 1);
}

#[test]
fn duplicate_title_is_rejected() {
    let conn = setup_db();
    ledger::insert(&conn, &migration(1, "same", "SELECT 1;")).unwrap();

    let err = ledger::insert(&conn, &migration(2, "same", "SELECT 2;")).unwrap_err();
    assert_unique_violation(err);
}

#[test]
fn duplicate_checksum_is_rejected() {
    let conn = setup_db();
    ledger::insert(&conn, &migration(1, "first", "SELECT 1;")).unwrap();

    // Same content, different id and title: still a constraint violation.
    let err = ledger::insert(&conn, &migration(2, "second", "SELECT 1;")).unwrap_err();
    assert_unique_violation(err);
}

#[test]
fn empty_ledger_queries() {
    let conn = setup_db();
    assert!(ledger::all(&conn).unwrap().is_empty());
    assert_eq!(ledger::count(&conn).unwrap(), 0);
}
