//! Stable subsystem codes for fatal log lines.
//!
//! The CLI tags its single error log with the code of the subsystem
//! that failed, so operators can grep for a class of failure without
//! depending on message wording.

pub const SCAN_ERROR: &str = "SEAM_SCAN";
pub const PARSE_ERROR: &str = "SEAM_PARSE";
pub const STORAGE_ERROR: &str = "SEAM_STORAGE";

/// Maps an error to its stable subsystem code.
pub trait SeamErrorCode {
    fn error_code(&self) -> &'static str;
}
