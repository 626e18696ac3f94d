//! Segment trie used for ancestor lookups.
//!
//! Each node corresponds to one full path prefix and stores the platforms
//! registered at exactly that prefix. A lookup walks root-to-leaf along the
//! query's segments and unions the platform sets of every node it visits, so
//! it never re-slices the query string.

use std::collections::{BTreeSet, HashMap};

use super::path::segments;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<String, TrieNode>,
    platforms: BTreeSet<String>,
}

/// Prefix tree keyed by location segments.
#[derive(Debug, Clone, Default)]
pub struct LocationTrie {
    root: TrieNode,
    nodes: usize,
}

impl LocationTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `platforms` at the node for `path`, creating intermediate
    /// nodes as needed.
    pub fn insert<I, S>(&mut self, path: &str, platforms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut node = &mut self.root;
        for segment in segments(path) {
            if !node.children.contains_key(segment) {
                self.nodes += 1;
            }
            node = node.children.entry(segment.to_string()).or_default();
        }
        node.platforms.extend(platforms.into_iter().map(Into::into));
    }

    /// Union of the platform sets on the path from the root to `path`.
    ///
    /// The walk stops at the first segment with no matching child.
    pub fn lookup_ancestors(&self, path: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let mut node = &self.root;
        for segment in segments(path) {
            match node.children.get(segment) {
                Some(child) => {
                    found.extend(child.platforms.iter().cloned());
                    node = child;
                }
                None => break,
            }
        }
        found
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Whether the trie holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes == 0
    }
}
