//! Immutable snapshot of the location index.
//!
//! A snapshot is built completely before it is published and never changes
//! afterwards. It owns every string it holds, so nothing the caller does to
//! its input mapping after a build can reach it.

use std::collections::{BTreeMap, BTreeSet};

use super::error::IndexError;
use super::path::{ancestors, LocationPath};
use super::trie::LocationTrie;
use crate::catalog::collect_distinct;

/// One frozen version of the location → platforms mapping.
#[derive(Debug, Clone, Default)]
pub struct LocationSnapshot {
    locations: BTreeMap<LocationPath, BTreeSet<String>>,
    trie: LocationTrie,
    catalog: Vec<String>,
}

impl LocationSnapshot {
    /// A snapshot with no locations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate `entries` and build an independent snapshot from them.
    ///
    /// Fails on an empty input, a malformed location, a location with no
    /// platforms, or a blank platform name. Repeated locations are merged and
    /// duplicate platform names collapse into one.
    pub fn from_entries<I, K, V, P>(entries: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut locations: BTreeMap<LocationPath, BTreeSet<String>> = BTreeMap::new();

        for (location, platforms) in entries {
            let location = location.as_ref();
            let path = LocationPath::parse(location).map_err(|reason| {
                IndexError::InvalidLocation {
                    location: location.to_string(),
                    reason,
                }
            })?;

            let mut names = BTreeSet::new();
            for platform in platforms {
                let platform = platform.as_ref();
                if platform.trim().is_empty() {
                    return Err(IndexError::InvalidPlatformName(location.to_string()));
                }
                names.insert(platform.to_string());
            }
            if names.is_empty() {
                return Err(IndexError::EmptyPlatformSet(location.to_string()));
            }

            locations.entry(path).or_default().extend(names);
        }

        if locations.is_empty() {
            return Err(IndexError::EmptyMapping);
        }

        let mut trie = LocationTrie::new();
        for (path, platforms) in &locations {
            trie.insert(path.as_str(), platforms.iter().cloned());
        }
        let catalog = collect_distinct(locations.values());

        Ok(Self {
            locations,
            trie,
            catalog,
        })
    }

    /// The full location → platforms mapping.
    pub fn locations(&self) -> &BTreeMap<LocationPath, BTreeSet<String>> {
        &self.locations
    }

    /// Platforms registered at exactly `location`.
    pub fn platforms_at(&self, location: &str) -> Option<&BTreeSet<String>> {
        self.locations.get(location)
    }

    /// Platforms registered at `path` or any of its ancestors.
    ///
    /// An empty path, or a path with no registered prefix, yields an empty set.
    pub fn lookup_ancestors(&self, path: &str) -> BTreeSet<String> {
        self.trie.lookup_ancestors(path)
    }

    /// Same result as [`lookup_ancestors`](Self::lookup_ancestors), computed by
    /// truncating `path` at each `/` and probing the map.
    pub fn lookup_ancestors_by_truncation(&self, path: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        for prefix in ancestors(path) {
            if let Some(platforms) = self.locations.get(prefix) {
                found.extend(platforms.iter().cloned());
            }
        }
        found
    }

    /// Every distinct platform name, sorted ascending (byte-wise).
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of distinct platform names.
    pub fn platform_count(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the snapshot has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
