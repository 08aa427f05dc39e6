//! Scan types.

/// Result of listing a migration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredSet {
    /// Valid migration filenames, ascending lexicographic order.
    pub files: Vec<String>,
    /// Entries excluded: subdirectories and names failing the grammar.
    pub skipped: usize,
}
