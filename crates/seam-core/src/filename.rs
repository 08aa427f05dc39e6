//! Migration filename grammar: `NN__title.sql`.
//!
//! Exactly two decimal digits, a double underscore, a title from
//! `[A-Za-z0-9_-]+`, and a literal `.sql` extension. The pattern is
//! anchored to the whole filename, so `01__title.sql.bak` never matches.

use once_cell::sync::Lazy;
use regex::Regex;

// [0-9] rather than \d: the prefix must be ASCII digits, and \d also
// matches Unicode decimal digits the numeric parse would choke on.
static FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})__([A-Za-z0-9_-]+)\.sql$").expect("valid filename regex"));

/// Whether a filename matches the migration grammar.
pub fn is_valid(name: &str) -> bool {
    FILENAME.is_match(name)
}

/// Extract the raw `(numeric prefix, title)` groups from a filename,
/// or `None` if it does not match the grammar.
pub fn capture(name: &str) -> Option<(&str, &str)> {
    let caps = FILENAME.captures(name)?;
    // Groups 1 and 2 always exist when the pattern matches.
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}
