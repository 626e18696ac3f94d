//! Location-independent view of every known platform.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::location::{IndexError, SnapshotSource};

/// Flatten platform sets into one distinct list sorted ascending.
///
/// Ordering is `String`'s `Ord`, i.e. byte-wise, so `"Zeta"` sorts before
/// `"alpha"`.
pub fn collect_distinct<'a, I>(sets: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a BTreeSet<String>>,
{
    let distinct: BTreeSet<&str> = sets
        .into_iter()
        .flat_map(|set| set.iter().map(String::as_str))
        .collect();
    distinct.into_iter().map(str::to_string).collect()
}

/// All distinct platform names across the current index snapshot.
pub struct PlatformCatalog {
    source: Arc<dyn SnapshotSource>,
}

impl PlatformCatalog {
    /// Create a catalog reading from `source`.
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    /// Every platform name, deduplicated and sorted ascending.
    pub fn all_distinct(&self) -> Result<Vec<String>, IndexError> {
        Ok(self.source.current()?.catalog().to_vec())
    }

    /// Number of distinct platforms.
    pub fn len(&self) -> Result<usize, IndexError> {
        Ok(self.source.current()?.platform_count())
    }

    /// Whether no platforms are known.
    pub fn is_empty(&self) -> Result<bool, IndexError> {
        Ok(self.len()? == 0)
    }

    /// Whether `name` is registered anywhere.
    pub fn contains(&self, name: &str) -> Result<bool, IndexError> {
        let snapshot = self.source.current()?;
        Ok(snapshot
            .catalog()
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok())
    }
}
