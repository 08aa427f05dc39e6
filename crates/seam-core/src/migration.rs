//! The in-memory migration record.

/// One discovered migration file.
///
/// Built once per run by [`crate::scan::load`] and immutable afterwards.
/// The ledger persists `id`, `title` and `checksum`; `content` stays in
/// memory only for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Numeric id from the two-digit filename prefix. Unique per run.
    pub id: u32,
    /// Title slug from the filename, case preserved. Unique per run.
    pub title: String,
    /// Lowercase hex MD5 of the exact file bytes. Unique per run.
    pub checksum: String,
    /// Full file text, executed against the database when applied.
    pub content: String,
}
