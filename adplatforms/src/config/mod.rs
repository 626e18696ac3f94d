//! User configuration for adplatforms.
//!
//! Configuration lives in `~/.adplatforms/config.ini`. A missing file means
//! defaults; present keys overlay them.
//!
//! ```ini
//! [storage]
//! file = ~/.adplatforms/platforms.txt
//!
//! [query]
//! page_size = 10
//!
//! [logging]
//! file = ~/.adplatforms/adplatforms.log
//! ```
//!
//! Settings structs live in [`settings`], constants in [`defaults`],
//! parsing in `parser`, and serialization in `writer`.

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    default_log_file, default_storage_file, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    DEFAULT_LOG_FILE_NAME, DEFAULT_QUERY_PAGE_SIZE, DEFAULT_STORAGE_FILE_NAME,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, QuerySettings, StorageSettings};
