//! Top-level run errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::SeamErrorCode;
use super::{ParseError, ScanError, StorageError};

/// Any error a full discover/load/apply run can surface.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SeamErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            PipelineError::Scan(e) => e.error_code(),
            PipelineError::Parse(e) => e.error_code(),
            PipelineError::Storage(e) => e.error_code(),
        }
    }
}

/// Result type alias for full runs.
pub type PipelineResult<T> = Result<T, PipelineError>;
