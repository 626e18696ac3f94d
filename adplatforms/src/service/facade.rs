//! Platform service facade implementation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{error, info, warn};

use super::config::ServiceConfig;
use super::error::ServiceError;
use super::response::{ResponseStatus, ServiceResponse};
use crate::ingest::{FileSource, PlatformSource};
use crate::location::{IndexError, LocationIndex, PlatformMapping, ReplaceSummary};
use crate::query::{PlatformFilter, PlatformPage, QueryEngine};

/// High-level facade over the location index.
///
/// Wires the index, the query engine, and a listing source together and
/// turns every outcome into a [`ServiceResponse`]. No method returns `Err`
/// or unwinds: failures and panics both come back as a non-OK status.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use adplatforms::ingest::MemorySource;
/// use adplatforms::location::LocationIndex;
/// use adplatforms::query::PlatformFilter;
/// use adplatforms::service::PlatformService;
///
/// let source = MemorySource::from_listing("Yandex.Direct: /ru\nRevda worker: /ru/svrd/revda");
/// let service = PlatformService::with_source(Arc::new(LocationIndex::new()), Arc::new(source), 10);
///
/// assert!(service.update_platforms().is_ok());
/// let page = service.get_platforms(1, &PlatformFilter::for_location("/ru/svrd/revda"));
/// assert_eq!(page.value.unwrap().total_items, 2);
/// ```
pub struct PlatformService {
    /// Shared index; other components may hold clones
    index: Arc<LocationIndex>,
    /// Query engine reading from the index
    engine: QueryEngine,
    /// Where `update_platforms` reads its listing
    source: Arc<dyn PlatformSource>,
}

impl PlatformService {
    /// Create a service with an empty index reading from the configured file.
    pub fn new(config: &ServiceConfig) -> Self {
        let source = FileSource::new(config.storage_file());
        if let Err(e) = source.ensure_parent_dir() {
            warn!(
                path = %config.storage_file().display(),
                error = %e,
                "Could not create listing directory"
            );
        }
        Self::with_source(
            Arc::new(LocationIndex::new()),
            Arc::new(source),
            config.page_size(),
        )
    }

    /// Create a service over an existing index and source.
    pub fn with_source(
        index: Arc<LocationIndex>,
        source: Arc<dyn PlatformSource>,
        page_size: usize,
    ) -> Self {
        let engine = QueryEngine::new(index.clone()).with_page_size(page_size);
        Self::from_parts(index, engine, source)
    }

    /// Assemble a service from separately built components.
    ///
    /// `engine` normally reads from `index`, but may read from any snapshot
    /// source.
    pub fn from_parts(
        index: Arc<LocationIndex>,
        engine: QueryEngine,
        source: Arc<dyn PlatformSource>,
    ) -> Self {
        Self {
            index,
            engine,
            source,
        }
    }

    /// The index this service writes to.
    pub fn index(&self) -> &Arc<LocationIndex> {
        &self.index
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.engine.page_size()
    }

    /// Description of the listing source.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Return page `page` of the platforms matching `filter`.
    pub fn get_platforms(
        &self,
        page: i64,
        filter: &PlatformFilter,
    ) -> ServiceResponse<PlatformPage> {
        match guarded(|| Ok(self.engine.query(page, filter)?)) {
            Ok(result) => {
                let description = format!("Page {} of {}", result.page, result.total_pages);
                ServiceResponse::ok(result, description)
            }
            Err(e) => {
                error!(error = %e, page, "Failed to get platforms");
                ServiceResponse::failure(e.kind().into(), format!("Failed to get platforms: {}", e))
            }
        }
    }

    /// Re-read the listing source and replace the whole index with it.
    pub fn update_platforms(&self) -> ServiceResponse<ReplaceSummary> {
        let mapping = match guarded(|| Ok(self.source.read_mapping()?)) {
            Ok(mapping) => mapping,
            Err(e) => {
                let source = self.source.describe();
                error!(source = %source, error = %e, "Failed to read platform listing");
                return ServiceResponse::failure(
                    e.kind().into(),
                    format!("Failed to read {}: {}", source, e),
                );
            }
        };
        self.update_with(mapping)
    }

    /// Replace the whole index with `mapping`.
    ///
    /// Readers see either the previous index or the new one, never an empty
    /// one in between.
    pub fn update_with(&self, mapping: PlatformMapping) -> ServiceResponse<ReplaceSummary> {
        match guarded(|| Ok(self.index.replace(mapping)?)) {
            Ok(summary) => {
                info!(
                    locations = summary.locations,
                    platforms = summary.platforms,
                    "Platforms updated"
                );
                ServiceResponse::ok(summary, "Platforms updated successfully")
            }
            Err(ServiceError::Index(IndexError::EmptyMapping)) => {
                warn!("Update rejected: no data");
                ServiceResponse::failure(ResponseStatus::BadRequest, "No data to update")
            }
            Err(e) => {
                error!(error = %e, "Failed to update platforms");
                ServiceResponse::failure(
                    e.kind().into(),
                    format!("Failed to update platforms: {}", e),
                )
            }
        }
    }

    /// Reset the index to empty.
    pub fn clear(&self) {
        self.index.clear();
        info!("Platforms cleared");
    }
}

/// Run `op`, converting a panic into [`ServiceError::Panicked`].
fn guarded<T>(op: impl FnOnce() -> Result<T, ServiceError>) -> Result<T, ServiceError> {
    panic::catch_unwind(AssertUnwindSafe(op))
        .unwrap_or_else(|payload| Err(ServiceError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
