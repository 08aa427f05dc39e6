//! Ledger storage errors.

use super::error_code::{self, SeamErrorCode};

/// Errors that can occur while talking to the ledger database.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error(
        "Checksum mismatch for migration {id}: ledger has {recorded}, file on disk is {actual}"
    )]
    ChecksumMismatch {
        id: u32,
        recorded: String,
        actual: String,
    },
}

impl SeamErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
