//! Filename and content parsing errors.

use super::error_code::{self, SeamErrorCode};

/// Errors that can occur while decomposing a migration filename or
/// decoding its content.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Filename does not match NN__title.sql: {name}")]
    InvalidFilename { name: String },

    #[error("Numeric prefix {prefix:?} of {name} is not a valid id")]
    InvalidId { name: String, prefix: String },

    #[error("Migration {name} is not valid UTF-8")]
    InvalidUtf8 { name: String },
}

impl SeamErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
