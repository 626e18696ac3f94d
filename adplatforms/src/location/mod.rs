//! Hierarchical location → advertising platform index.
//!
//! The [`LocationIndex`] maps location paths such as `Country/City/District`
//! to the set of platforms registered there, and answers "which platforms
//! apply here" by unioning the sets of the path and every ancestor.
//!
//! # Architecture
//!
//! ```text
//! LocationIndex
//! └── ArcSwap<LocationSnapshot>        (replaced wholesale, never mutated)
//!     ├── locations: Country/City → {PlatformB}, ...
//!     ├── trie:      Country ─ City ─ District
//!     └── catalog:   [PlatformA, PlatformB, ...]
//! ```
//!
//! # Usage
//!
//! ```
//! use adplatforms::location::LocationIndex;
//!
//! let index = LocationIndex::new();
//! index
//!     .replace([
//!         ("Country", vec!["PlatformA"]),
//!         ("Country/City", vec!["PlatformB"]),
//!     ])
//!     .unwrap();
//!
//! let found = index.lookup_ancestors("Country/City/District");
//! assert_eq!(found.len(), 2);
//! ```

mod error;
mod index;
mod path;
mod snapshot;
mod trie;

use std::collections::HashMap;

pub use error::IndexError;
pub use index::{LocationIndex, ReplaceSummary, SnapshotSource};
pub use path::{ancestors, segments, validate, Ancestors, LocationPath, PathError, Segments};
pub use snapshot::LocationSnapshot;
pub use trie::LocationTrie;

/// Raw location → platform names mapping, as produced by ingestion.
///
/// Platform lists keep first-seen order; the index imposes its own ordering.
pub type PlatformMapping = HashMap<String, Vec<String>>;
