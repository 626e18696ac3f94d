//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Platform listing storage
    pub storage: StorageSettings,
    /// Query behavior
    pub query: QuerySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Where the platform listing is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    /// Listing file path
    pub file: PathBuf,
}

/// Query configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    /// Records per page, at least 1
    pub page_size: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
