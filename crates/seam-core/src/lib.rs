//! seam-core: migration discovery and integrity primitives.
//!
//! This crate provides the database-agnostic half of seam:
//! - Filename grammar: `NN__title.sql` validation and extraction
//! - Checksum: MD5 content digests that end up in the persisted ledger
//! - Scan: directory discovery and migration loading
//! - Errors: one enum per subsystem, aggregated by `PipelineError`

pub mod checksum;
pub mod errors;
pub mod filename;
pub mod migration;
pub mod scan;

// Re-exports for convenience
pub use errors::{
    ParseError, PipelineError, PipelineResult, ScanError, SeamErrorCode, StorageError,
};
pub use migration::Migration;
pub use scan::{discover, load, DiscoveredSet};
