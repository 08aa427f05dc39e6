//! Error handling for seam.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod error_code;
pub mod parse_error;
pub mod pipeline_error;
pub mod scan_error;
pub mod storage_error;

pub use error_code::SeamErrorCode;
pub use parse_error::ParseError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use scan_error::ScanError;
pub use storage_error::StorageError;
