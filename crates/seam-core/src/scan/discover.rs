//! Directory discovery: list, filter, sort.

use std::fs;
use std::path::Path;

use crate::errors::ScanError;
use crate::filename;

use super::types::DiscoveredSet;

/// List `dir` (non-recursive) and return the migration filenames that
/// match the `NN__title.sql` grammar, sorted ascending, together with a
/// count of skipped entries.
///
/// Subdirectories are always skipped, even when their name matches the
/// grammar. Filenames that are not valid UTF-8 cannot match and are
/// counted as skipped too. The result is deterministic for a fixed
/// directory snapshot.
pub fn discover(dir: &Path) -> Result<DiscoveredSet, ScanError> {
    let entries = fs::read_dir(dir).map_err(|e| ScanError::DirectoryRead {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        let entry = entry.map_err(|e| ScanError::DirectoryRead {
            path: dir.display().to_string(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| ScanError::DirectoryRead {
            path: entry.path().display().to_string(),
            source: e,
        })?;

        let name = entry.file_name();
        let name = match name.to_str() {
            Some(name) => name,
            None => {
                skipped += 1;
                continue;
            }
        };

        if file_type.is_dir() || !filename::is_valid(name) {
            skipped += 1;
            continue;
        }

        files.push(name.to_string());
    }

    files.sort();

    tracing::info!(
        found = files.len(),
        skipped,
        dir = %dir.display(),
        "discovered migration files"
    );

    Ok(DiscoveredSet { files, skipped })
}
