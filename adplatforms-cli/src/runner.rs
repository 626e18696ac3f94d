//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, and service creation
//! to reduce duplication across command handlers.

use std::path::PathBuf;

use adplatforms::config::ConfigFile;
use adplatforms::logging::{init_logging, LoggingGuard};
use adplatforms::service::{PlatformService, ServiceConfig};
use tracing::info;

use crate::commands::common::{load_config, GlobalOptions};
use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    _logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Load config and initialize logging.
    pub fn new(options: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_config(options)?;

        let logging_guard = init_logging(&config.logging.file, options.verbose, options.debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            _logging_guard: logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("adplatforms v{}", adplatforms::VERSION);
        info!("adplatforms CLI: {} command", command);
    }

    /// Create a service, with `file` overriding the configured listing.
    pub fn create_service(&self, file: Option<PathBuf>) -> PlatformService {
        let mut builder = ServiceConfig::builder()
            .storage_file(self.config.storage.file.clone())
            .page_size(self.config.query.page_size);
        if let Some(file) = file {
            builder = builder.storage_file(file);
        }
        let config = builder.build();

        info!(
            listing = %config.storage_file().display(),
            page_size = config.page_size(),
            "Service created"
        );
        PlatformService::new(&config)
    }
}
