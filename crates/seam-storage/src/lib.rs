//! seam-storage: SQLite persistence for the migration ledger.
//!
//! - connection: open + pragmas, one scope-bound connection per run
//! - schema: idempotent ledger DDL
//! - queries: ledger reads/writes as free functions over `&Connection`
//! - apply: bring the database up to date with the discovered set

pub mod apply;
pub mod connection;
pub mod queries;
pub mod schema;

pub use apply::ApplyReport;
