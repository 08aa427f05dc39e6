//! Filesystem scanning errors.

use super::error_code::{self, SeamErrorCode};

/// Errors that can occur while listing the migration directory or
/// reading a migration file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to list directory {path}: {source}")]
    DirectoryRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
}

impl SeamErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
