//! Service configuration types.

use std::path::{Path, PathBuf};

use crate::config::{default_storage_file, ConfigFile, DEFAULT_QUERY_PAGE_SIZE};

/// Configuration for the platform service.
///
/// # Example
///
/// ```
/// use adplatforms::service::ServiceConfig;
///
/// let config = ServiceConfig::builder()
///     .storage_file("/srv/ads/platforms.txt")
///     .page_size(20)
///     .build();
///
/// assert_eq!(config.page_size(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Platform listing read by `update_platforms`
    storage_file: PathBuf,
    /// Records per page
    page_size: usize,
}

impl ServiceConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Get the platform listing path.
    pub fn storage_file(&self) -> &Path {
        &self.storage_file
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&ConfigFile> for ServiceConfig {
    fn from(config: &ConfigFile) -> Self {
        Self::builder()
            .storage_file(config.storage.file.clone())
            .page_size(config.query.page_size)
            .build()
    }
}

/// Builder for ServiceConfig.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    storage_file: Option<PathBuf>,
    page_size: Option<usize>,
}

impl ServiceConfigBuilder {
    /// Set the platform listing path.
    pub fn storage_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_file = Some(path.into());
        self
    }

    /// Set the page size. Zero is raised to one.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size.max(1));
        self
    }

    /// Build the configuration with defaults for unset values.
    pub fn build(self) -> ServiceConfig {
        ServiceConfig {
            storage_file: self.storage_file.unwrap_or_else(default_storage_file),
            page_size: self.page_size.unwrap_or(DEFAULT_QUERY_PAGE_SIZE),
        }
    }
}
