//! Filtered, sorted, paginated platform listings.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::filter::{PlatformFilter, PlatformPage, PlatformRecord};
use super::page::{PageWindow, DEFAULT_PAGE_SIZE};
use crate::catalog::PlatformCatalog;
use crate::error::ErrorKind;
use crate::location::{IndexError, SnapshotSource};

/// Errors raised while answering a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The index snapshot could not be read.
    #[error("failed to read location index: {0}")]
    Snapshot(#[from] IndexError),
}

impl QueryError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Snapshot(_) => ErrorKind::Internal,
        }
    }
}

/// Answers paginated platform queries against a snapshot source.
///
/// Location queries go through the ancestor lookup; unfiltered queries go
/// through the [`PlatformCatalog`] over the same source. Either way each query
/// reads exactly one snapshot, so a concurrent replacement never mixes two
/// index versions into one page.
pub struct QueryEngine {
    source: Arc<dyn SnapshotSource>,
    catalog: PlatformCatalog,
    page_size: usize,
}

impl QueryEngine {
    /// Create an engine with the default page size.
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            catalog: PlatformCatalog::new(Arc::clone(&source)),
            source,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size. Zero is raised to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The catalog answering unfiltered queries.
    pub fn catalog(&self) -> &PlatformCatalog {
        &self.catalog
    }

    /// Resolve `filter`, then return page `page` of the sorted result.
    ///
    /// With a location the result is every platform registered at that
    /// location or an ancestor of it; without one it is the full catalog.
    pub fn query(&self, page: i64, filter: &PlatformFilter) -> Result<PlatformPage, QueryError> {
        let names: Vec<String> = match filter.effective_location() {
            Some(location) => self
                .source
                .current()?
                .lookup_ancestors(location)
                .into_iter()
                .collect(),
            None => self.catalog.all_distinct()?,
        };
        debug_assert!(names.windows(2).all(|pair| pair[0] < pair[1]));

        let window = PageWindow::compute(page, self.page_size, names.len());
        let items = names[window.start..window.end]
            .iter()
            .map(|name| PlatformRecord { name: name.clone() })
            .collect();

        debug!(
            location = filter.effective_location().unwrap_or(""),
            requested_page = page,
            page = window.reported_page,
            total_pages = window.total_pages,
            matches = names.len(),
            "Platform query resolved"
        );

        Ok(PlatformPage {
            items,
            page: window.reported_page,
            total_pages: window.total_pages,
            total_items: names.len(),
            filter: filter.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{LocationIndex, LocationSnapshot};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct BrokenSource;

    /// Counts how many snapshots were handed out.
    struct CountingSource {
        index: LocationIndex,
        loads: AtomicUsize,
    }

    impl SnapshotSource for CountingSource {
        fn current(&self) -> Result<Arc<LocationSnapshot>, IndexError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.index.current()
        }
    }

    impl SnapshotSource for BrokenSource {
        fn current(&self) -> Result<Arc<LocationSnapshot>, IndexError> {
            Err(IndexError::Unavailable("database connection failed".to_string()))
        }
    }

    fn scenario_engine() -> QueryEngine {
        let index = Arc::new(LocationIndex::new());
        index
            .replace([
                ("Country", vec!["PlatformA"]),
                ("Country/City", vec!["PlatformB"]),
                ("Country/City/District", vec!["PlatformC"]),
                ("Country/OtherCity", vec!["PlatformD"]),
            ])
            .unwrap();
        QueryEngine::new(index)
    }

    fn fifteen_engine() -> QueryEngine {
        let platforms: Vec<String> = (1..=15).map(|i| format!("Platform{i:02}")).collect();
        let index = Arc::new(LocationIndex::new());
        index.replace([("Location", platforms)]).unwrap();
        QueryEngine::new(index)
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    #[test]
    fn test_location_filter_includes_ancestors() {
        let engine = scenario_engine();
        let page = engine
            .query(1, &PlatformFilter::for_location("Country/City/District"))
            .unwrap();

        assert_eq!(page.names(), vec!["PlatformA", "PlatformB", "PlatformC"]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_no_filter_lists_all_distinct() {
        let engine = scenario_engine();
        let page = engine.query(1, &PlatformFilter::none()).unwrap();

        assert_eq!(
            page.names(),
            vec!["PlatformA", "PlatformB", "PlatformC", "PlatformD"]
        );
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_blank_filter_behaves_like_none() {
        let engine = scenario_engine();
        let page = engine.query(1, &PlatformFilter::for_location("")).unwrap();
        assert_eq!(page.total_items, 4);
    }

    #[test]
    fn test_search_counts() {
        let engine = scenario_engine();
        for (location, expected) in [
            ("Country/City", 2),
            ("Country/City/District", 3),
            ("Non/Existent/Location", 0),
        ] {
            let page = engine
                .query(1, &PlatformFilter::for_location(location))
                .unwrap();
            assert_eq!(page.items.len(), expected, "location {location}");
        }
    }

    #[test]
    fn test_filter_is_echoed() {
        let engine = scenario_engine();
        let filter = PlatformFilter::for_location("Country/City");
        let page = engine.query(1, &filter).unwrap();
        assert_eq!(page.filter, filter);
    }

    #[test]
    fn test_unfiltered_query_lists_catalog() {
        let engine = scenario_engine();
        let page = engine.query(1, &PlatformFilter::none()).unwrap();
        let catalog = engine.catalog().all_distinct().unwrap();

        assert_eq!(page.names(), catalog.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(page.total_items, engine.catalog().len().unwrap());
    }

    #[test]
    fn test_each_query_loads_one_snapshot() {
        let source = Arc::new(CountingSource {
            index: LocationIndex::new(),
            loads: AtomicUsize::new(0),
        });
        source
            .index
            .replace([("Country", vec!["PlatformA"]), ("Country/City", vec!["PlatformB"])])
            .unwrap();
        let engine = QueryEngine::new(source.clone());

        engine.query(1, &PlatformFilter::none()).unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);

        engine
            .query(1, &PlatformFilter::for_location("Country/City"))
            .unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_sort_is_ordinal() {
        let index = Arc::new(LocationIndex::new());
        index
            .replace([("A", vec!["beta", "Alpha", "alpha", "Beta"])])
            .unwrap();
        let engine = QueryEngine::new(index);

        let page = engine.query(1, &PlatformFilter::none()).unwrap();
        assert_eq!(page.names(), vec!["Alpha", "Beta", "alpha", "beta"]);
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    #[test]
    fn test_pagination_fifteen_items() {
        let engine = fifteen_engine();
        // (requested page, expected items, expected reported page)
        for (requested, count, reported) in [(1, 10, 1), (2, 5, 2), (-1, 10, 1), (0, 10, 1), (3, 0, 2)]
        {
            let page = engine.query(requested, &PlatformFilter::none()).unwrap();
            assert_eq!(page.items.len(), count, "page {requested}");
            assert_eq!(page.total_pages, 2, "page {requested}");
            assert_eq!(page.page, reported, "page {requested}");
        }
    }

    #[test]
    fn test_second_page_contents() {
        let engine = fifteen_engine();
        let page = engine.query(2, &PlatformFilter::none()).unwrap();
        assert_eq!(page.items.first().unwrap().name, "Platform11");
        assert_eq!(page.items.last().unwrap().name, "Platform15");
    }

    #[test]
    fn test_custom_page_size() {
        let engine = fifteen_engine().with_page_size(4);
        assert_eq!(engine.page_size(), 4);

        let page = engine.query(4, &PlatformFilter::none()).unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.names(), vec!["Platform13", "Platform14", "Platform15"]);
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let engine = fifteen_engine().with_page_size(0);
        assert_eq!(engine.page_size(), 1);
    }

    #[test]
    fn test_empty_index() {
        let engine = QueryEngine::new(Arc::new(LocationIndex::new()));
        let page = engine.query(1, &PlatformFilter::none()).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }

    // =========================================================================
    // Failure
    // =========================================================================

    #[test]
    fn test_source_failure_is_internal() {
        let engine = QueryEngine::new(Arc::new(BrokenSource));
        let err = engine.query(1, &PlatformFilter::none()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("database connection failed"));
    }
}
