//! Location path type and the ancestor/segment walks over it.
//!
//! A location path is a `/`-separated list of opaque segments such as
//! `Country/City/District`. A single leading `/` is allowed and belongs to the
//! first segment, so `/ru/svrd` has the segments `/ru` and `svrd`.
//!
//! The ancestor chain of a path is produced by repeatedly truncating at the
//! last `/`. The walk stops when no `/` remains or when the only remaining `/`
//! is the leading one:
//!
//! ```
//! use adplatforms::location::ancestors;
//!
//! let chain: Vec<&str> = ancestors("A/B/C").collect();
//! assert_eq!(chain, vec!["A/B/C", "A/B", "A"]);
//!
//! let chain: Vec<&str> = ancestors("/ru/svrd").collect();
//! assert_eq!(chain, vec!["/ru/svrd", "/ru"]);
//! ```

use std::borrow::Borrow;
use std::fmt;

use thiserror::Error;

/// Segment separator used in location paths.
pub const SEPARATOR: char = '/';

/// Reasons a string is rejected as a location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path is the empty string.
    #[error("path is empty")]
    Empty,
    /// The path contains an empty segment (`//`, a trailing `/`, or only `/`).
    #[error("path contains an empty segment")]
    EmptySegment,
}

/// A validated, well-formed location path.
///
/// Ordering and hashing match the underlying `str`, so a
/// `BTreeMap<LocationPath, _>` can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationPath(String);

impl LocationPath {
    /// Validate `path` and wrap it.
    ///
    /// The string is taken as-is; callers that read user input should trim it
    /// first.
    pub fn parse(path: impl Into<String>) -> Result<Self, PathError> {
        let path = path.into();
        validate(&path)?;
        Ok(Self(path))
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of segments in the path.
    pub fn depth(&self) -> usize {
        segments(&self.0).count()
    }

    /// Iterate the path and its ancestors, longest first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        ancestors(&self.0)
    }

    /// Iterate the path's segments, root first.
    pub fn segments(&self) -> Segments<'_> {
        segments(&self.0)
    }
}

impl Borrow<str> for LocationPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check that `path` is a well-formed location path.
pub fn validate(path: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    if segments(path).any(|segment| segment.is_empty() || segment == "/") {
        return Err(PathError::EmptySegment);
    }
    Ok(())
}

/// Iterate `path` and every ancestor of it, longest first.
///
/// Works on any string, well-formed or not. An empty string yields nothing.
pub fn ancestors(path: &str) -> Ancestors<'_> {
    Ancestors {
        current: (!path.is_empty()).then_some(path),
    }
}

/// Iterate the segments of `path`, root first.
///
/// Segment `i` ends where ancestor `depth - 1 - i` ends, so joining the first
/// `k` segments with `/` reproduces the `k`-segment ancestor.
pub fn segments(path: &str) -> Segments<'_> {
    Segments {
        rest: (!path.is_empty()).then_some(path),
        first: true,
    }
}

/// Iterator returned by [`ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    current: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.current?;
        self.current = match current.rfind(SEPARATOR) {
            Some(idx) if idx > 0 => Some(&current[..idx]),
            _ => None,
        };
        Some(current)
    }
}

/// Iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: Option<&'a str>,
    first: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        // The leading separator is part of the first segment.
        let search_from = usize::from(self.first && rest.starts_with(SEPARATOR));
        self.first = false;

        match rest[search_from..].find(SEPARATOR) {
            Some(offset) => {
                let cut = search_from + offset;
                self.rest = Some(&rest[cut + 1..]);
                Some(&rest[..cut])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
