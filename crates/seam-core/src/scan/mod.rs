//! Scan module: directory discovery and migration loading.
//!
//! Two sequential stages:
//! - `discover` lists a directory once and returns the sorted, validated
//!   migration filenames plus a skipped-entry count
//! - `load` turns one discovered filename into an in-memory
//!   [`Migration`](crate::Migration)

mod discover;
mod loader;
mod types;

pub use discover::discover;
pub use loader::load;
pub use types::DiscoveredSet;
