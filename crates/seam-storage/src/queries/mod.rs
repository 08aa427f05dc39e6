//! Ledger queries, grouped per table.

pub mod ledger;
