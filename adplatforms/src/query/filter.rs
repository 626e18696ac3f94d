//! Query filter and result types.

use serde::{Deserialize, Serialize};

/// Optional narrowing of a platform query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFilter {
    /// Location whose platforms (and its ancestors' platforms) are wanted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl PlatformFilter {
    /// A filter that matches every platform.
    pub fn none() -> Self {
        Self::default()
    }

    /// A filter for `location` and its ancestors.
    pub fn for_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
        }
    }

    /// The trimmed location, or `None` when absent or blank.
    pub fn effective_location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|location| !location.is_empty())
    }
}

/// One platform in a result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformRecord {
    /// Platform name.
    pub name: String,
}

/// One page of platform results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformPage {
    /// Platforms on this page, sorted ascending by name.
    pub items: Vec<PlatformRecord>,
    /// Requested page clamped into `1..=max(total_pages, 1)`.
    pub page: usize,
    /// Number of pages for the whole result; zero when nothing matched.
    pub total_pages: usize,
    /// Number of matching platforms across all pages.
    pub total_items: usize,
    /// The filter the page was produced for.
    pub filter: PlatformFilter,
}

impl PlatformPage {
    /// Platform names on this page.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|record| record.name.as_str()).collect()
    }
}
