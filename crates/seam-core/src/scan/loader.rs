//! Migration loading: filename decomposition, content read, checksum.

use std::fs;
use std::path::Path;

use crate::checksum;
use crate::errors::{ParseError, PipelineResult, ScanError};
use crate::filename;
use crate::migration::Migration;

/// Load one migration file into an immutable [`Migration`] record.
///
/// The filename grammar is re-applied here even though `discover`
/// already validated it: `load` is independently callable and must not
/// trust caller discipline. The checksum covers the exact file bytes;
/// the content must additionally be valid UTF-8 because it is executed
/// as SQL text when the migration is applied.
pub fn load(dir: &Path, file: &str) -> PipelineResult<Migration> {
    let (prefix, title) = filename::capture(file).ok_or_else(|| ParseError::InvalidFilename {
        name: file.to_string(),
    })?;

    let id: u32 = prefix.parse().map_err(|_| ParseError::InvalidId {
        name: file.to_string(),
        prefix: prefix.to_string(),
    })?;

    let path = dir.join(file);
    let bytes = fs::read(&path).map_err(|e| ScanError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;

    let checksum = checksum::content_checksum(&bytes);

    let content = String::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8 {
        name: file.to_string(),
    })?;

    Ok(Migration {
        id,
        title: title.to_string(),
        checksum,
        content,
    })
}
