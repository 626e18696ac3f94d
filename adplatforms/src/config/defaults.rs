//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;

/// Name of the configuration directory under the home directory.
pub const CONFIG_DIR_NAME: &str = ".adplatforms";

/// Name of the configuration file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Listing file name used when `[storage] file` is not configured.
pub const DEFAULT_STORAGE_FILE_NAME: &str = "platforms.txt";

/// Log file name used when `[logging] file` is not configured.
pub const DEFAULT_LOG_FILE_NAME: &str = "adplatforms.log";

/// Default records per page.
pub const DEFAULT_QUERY_PAGE_SIZE: usize = crate::query::DEFAULT_PAGE_SIZE;

/// Default listing path (~/.adplatforms/platforms.txt).
pub fn default_storage_file() -> PathBuf {
    config_directory().join(DEFAULT_STORAGE_FILE_NAME)
}

/// Default log path (~/.adplatforms/adplatforms.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            storage: StorageSettings {
                file: default_storage_file(),
            },
            query: QuerySettings {
                page_size: DEFAULT_QUERY_PAGE_SIZE,
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
