//! The live location → platforms index.
//!
//! The index holds one [`LocationSnapshot`] behind an [`ArcSwap`]. Writers
//! build a complete replacement off to the side and publish it with a single
//! pointer swap; readers load whatever snapshot is current and keep using it
//! for as long as they hold the `Arc`.
//!
//! # Thread Safety
//!
//! - Reads are lock-free (`ArcSwap` load, then immutable data)
//! - Writers hold a mutex from the start of the build until the swap, so at
//!   most one `replace()` or `clear()` is in flight and they publish in the
//!   order they acquired the lock
//!
//! # ACID Properties
//!
//! - **Atomicity**: `replace()` validates and builds the whole snapshot, then swaps
//! - **Consistency**: Readers see either the old or the new snapshot, never a mix
//! - **Isolation**: A reader's snapshot is unaffected by later swaps
//! - **Durability**: N/A (in-memory only)

use std::collections::BTreeSet;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info};

use super::error::IndexError;
use super::snapshot::LocationSnapshot;

/// Anything that can hand out the current snapshot.
///
/// The catalog and the query engine read through this seam so they can be
/// driven by a [`LocationIndex`] in production and by a stub in tests.
pub trait SnapshotSource: Send + Sync {
    /// The snapshot to answer the next read from.
    fn current(&self) -> Result<Arc<LocationSnapshot>, IndexError>;
}

/// Counts describing a successfully published snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplaceSummary {
    /// Number of distinct locations in the new snapshot.
    pub locations: usize,
    /// Number of distinct platform names in the new snapshot.
    pub platforms: usize,
}

/// In-memory hierarchical location index.
pub struct LocationIndex {
    current: ArcSwap<LocationSnapshot>,
    writer: Mutex<()>,
}

impl LocationIndex {
    /// Create an index holding an empty snapshot.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(LocationSnapshot::empty()),
            writer: Mutex::new(()),
        }
    }

    /// Atomically replace the whole index with `mapping`.
    ///
    /// The mapping is validated and deep-copied before anything is published.
    /// On error the previous snapshot stays in place untouched. Concurrent
    /// writers wait for this call to finish before they start building.
    pub fn replace<I, K, V, P>(&self, mapping: I) -> Result<ReplaceSummary, IndexError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let summary = {
            let _guard = self.writer.lock();
            let snapshot = LocationSnapshot::from_entries(mapping)?;
            let summary = ReplaceSummary {
                locations: snapshot.location_count(),
                platforms: snapshot.platform_count(),
            };
            self.current.store(Arc::new(snapshot));
            summary
        };

        info!(
            locations = summary.locations,
            platforms = summary.platforms,
            "Location index replaced"
        );
        Ok(summary)
    }

    /// Publish an empty snapshot.
    ///
    /// This is a standalone reset. Calling it before [`replace`](Self::replace)
    /// lets readers observe the empty index in between.
    pub fn clear(&self) {
        let _guard = self.writer.lock();
        self.current.store(Arc::new(LocationSnapshot::empty()));
        debug!("Location index cleared");
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<LocationSnapshot> {
        self.current.load_full()
    }

    /// Platforms registered at `path` or any of its ancestors.
    pub fn lookup_ancestors(&self, path: &str) -> BTreeSet<String> {
        self.current.load().lookup_ancestors(path)
    }

    /// Number of locations in the current snapshot.
    pub fn location_count(&self) -> usize {
        self.current.load().location_count()
    }

    /// Whether the current snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }
}

impl Default for LocationIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for LocationIndex {
    fn current(&self) -> Result<Arc<LocationSnapshot>, IndexError> {
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::PlatformMapping;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::thread;
    use std::time::Duration;

    fn scenario() -> PlatformMapping {
        HashMap::from([
            ("Country".to_string(), vec!["PlatformA".to_string()]),
            ("Country/City".to_string(), vec!["PlatformB".to_string()]),
            (
                "Country/City/District".to_string(),
                vec!["PlatformC".to_string()],
            ),
            ("Country/OtherCity".to_string(), vec!["PlatformD".to_string()]),
        ])
    }

    fn names(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    #[test]
    fn test_new_is_empty() {
        let index = LocationIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.location_count(), 0);
        assert!(index.lookup_ancestors("Country").is_empty());
    }

    #[test]
    fn test_default() {
        let index = LocationIndex::default();
        assert!(index.snapshot().is_empty());
    }

    // =========================================================================
    // Replace
    // =========================================================================

    #[test]
    fn test_replace_then_snapshot_matches_input() {
        let index = LocationIndex::new();
        let mapping = scenario();

        let summary = index.replace(&mapping).unwrap();
        assert_eq!(
            summary,
            ReplaceSummary {
                locations: 4,
                platforms: 4
            }
        );

        let snapshot = index.snapshot();
        let stored: HashMap<String, BTreeSet<String>> = snapshot
            .locations()
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let expected: HashMap<String, BTreeSet<String>> = mapping
            .iter()
            .map(|(k, v)| (k.clone(), v.iter().cloned().collect()))
            .collect();
        assert_eq!(stored, expected);
    }

    #[test]
    fn test_replace_copy_is_independent() {
        let index = LocationIndex::new();
        let mut mapping = scenario();
        index.replace(&mapping).unwrap();

        mapping.clear();
        mapping.insert("Other".to_string(), vec!["Z".to_string()]);

        assert_eq!(index.location_count(), 4);
        assert!(index.snapshot().platforms_at("Other").is_none());
    }

    #[test]
    fn test_replace_empty_leaves_previous_snapshot() {
        let index = LocationIndex::new();
        index.replace(&scenario()).unwrap();
        let before = index.snapshot();

        let err = index.replace(&PlatformMapping::new()).unwrap_err();
        assert_eq!(err, IndexError::EmptyMapping);
        assert!(Arc::ptr_eq(&before, &index.snapshot()));
    }

    #[test]
    fn test_replace_invalid_leaves_previous_snapshot() {
        let index = LocationIndex::new();
        index.replace(&scenario()).unwrap();

        let err = index.replace([("Good", vec!["P"]), ("Bad/", vec!["Q"])]);
        assert!(err.is_err());
        assert_eq!(index.location_count(), 4);
        assert!(index.snapshot().platforms_at("Good").is_none());
    }

    #[test]
    fn test_replace_swaps_whole_mapping() {
        let index = LocationIndex::new();
        index.replace(&scenario()).unwrap();
        index.replace([("/ru", vec!["Yandex"])]).unwrap();

        assert_eq!(index.location_count(), 1);
        assert!(index.lookup_ancestors("Country/City").is_empty());
        assert_eq!(names(&index.lookup_ancestors("/ru/msk")), vec!["Yandex"]);
    }

    #[test]
    fn test_held_snapshot_survives_replace() {
        let index = LocationIndex::new();
        index.replace(&scenario()).unwrap();
        let held = index.snapshot();

        index.replace([("/ru", vec!["Yandex"])]).unwrap();

        assert_eq!(held.location_count(), 4);
        assert_eq!(
            names(&held.lookup_ancestors("Country/City")),
            vec!["PlatformA", "PlatformB"]
        );
    }

    // =========================================================================
    // Clear
    // =========================================================================

    #[test]
    fn test_clear() {
        let index = LocationIndex::new();
        index.replace(&scenario()).unwrap();
        index.clear();

        assert!(index.is_empty());
        assert!(index.lookup_ancestors("Country/City").is_empty());
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    #[test]
    fn test_lookup_ancestors_scenario() {
        let index = LocationIndex::new();
        index.replace(&scenario()).unwrap();

        assert_eq!(
            names(&index.lookup_ancestors("Country/City/District")),
            vec!["PlatformA", "PlatformB", "PlatformC"]
        );
        assert!(index.lookup_ancestors("").is_empty());
        assert!(index.lookup_ancestors("Non/Existent/Location").is_empty());
    }

    #[test]
    fn test_snapshot_source_impl() {
        let index = LocationIndex::new();
        index.replace(&scenario()).unwrap();

        let source: &dyn SnapshotSource = &index;
        assert_eq!(source.current().unwrap().location_count(), 4);
    }

    // =========================================================================
    // Concurrency
    // =========================================================================

    fn generation(tag: &str, size: usize) -> PlatformMapping {
        let mut mapping = PlatformMapping::new();
        mapping.insert("Country".to_string(), vec![format!("{tag}-root")]);
        mapping.insert("Country/City".to_string(), vec![format!("{tag}-city")]);
        for i in 0..size {
            mapping.insert(format!("{tag}{i}"), vec![format!("{tag}-{i}")]);
        }
        mapping
    }

    #[test]
    fn test_concurrent_readers_never_see_mixed_snapshots() {
        let index = Arc::new(LocationIndex::new());
        index.replace(&generation("old", 50)).unwrap();

        let writer_index = Arc::clone(&index);
        let writer = thread::spawn(move || {
            let old = generation("old", 50);
            let new = generation("new", 50);
            for round in 0..200 {
                let next = if round % 2 == 0 { &new } else { &old };
                writer_index.replace(next).unwrap();
            }
        });

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let idx = Arc::clone(&index);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let found = idx.lookup_ancestors("Country/City");
                        let found = names(&found).join(",");
                        assert!(
                            found == "old-city,old-root" || found == "new-city,new-root",
                            "mixed lookup result: {found}"
                        );

                        let snapshot = idx.snapshot();
                        let tags: BTreeSet<&str> = snapshot
                            .catalog()
                            .iter()
                            .filter_map(|name| name.split('-').next())
                            .collect();
                        assert_eq!(tags.len(), 1, "mixed snapshot: {tags:?}");
                        assert_eq!(snapshot.location_count(), 52);
                    }
                })
            })
            .collect();

        writer.join().expect("writer thread panicked");
        for reader in readers {
            reader.join().expect("reader thread panicked");
        }
    }

    /// Mapping iterator that parks inside `replace` until released.
    struct GatedMapping {
        entered: Sender<()>,
        release: Receiver<()>,
        yielded: bool,
    }

    impl Iterator for GatedMapping {
        type Item = (&'static str, Vec<&'static str>);

        fn next(&mut self) -> Option<Self::Item> {
            if self.yielded {
                return None;
            }
            self.yielded = true;
            self.entered.send(()).unwrap();
            self.release.recv().unwrap();
            Some(("First", vec!["FirstCaller"]))
        }
    }

    #[test]
    fn test_writers_run_one_at_a_time_in_call_order() {
        let index = Arc::new(LocationIndex::new());
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();

        let first_index = Arc::clone(&index);
        let first = thread::spawn(move || {
            first_index
                .replace(GatedMapping {
                    entered: entered_tx,
                    release: release_rx,
                    yielded: false,
                })
                .unwrap();
        });
        entered_rx.recv().unwrap();

        let second_done = Arc::new(AtomicBool::new(false));
        let second_index = Arc::clone(&index);
        let done = Arc::clone(&second_done);
        let second = thread::spawn(move || {
            second_index
                .replace([("Second", vec!["SecondCaller"])])
                .unwrap();
            done.store(true, Ordering::SeqCst);
        });

        thread::sleep(Duration::from_millis(100));
        assert!(
            !second_done.load(Ordering::SeqCst),
            "second writer finished while the first was still building"
        );
        assert!(index.is_empty());

        release_tx.send(()).unwrap();
        first.join().expect("first writer panicked");
        second.join().expect("second writer panicked");

        let snapshot = index.snapshot();
        assert_eq!(snapshot.location_count(), 1);
        assert!(snapshot.platforms_at("First").is_none());
        assert_eq!(
            names(snapshot.platforms_at("Second").unwrap()),
            vec!["SecondCaller"]
        );
    }

    #[test]
    fn test_index_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LocationIndex>();
    }
}
