//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use adplatforms::config::{config_file_path, ConfigFile};
use clap::Args;
use serde::Serialize;

use crate::error::CliError;

/// Options accepted by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit config file, if given
    pub config: Option<PathBuf>,
    /// Debug-level logging
    pub debug: bool,
    /// Mirror logs to stderr
    pub verbose: bool,
}

impl GlobalOptions {
    /// Config file these options point at.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config_file_path)
    }
}

/// Listing selection shared by commands that load platforms.
#[derive(Debug, Clone, Default, Args)]
pub struct StorageArgs {
    /// Platform listing file (default: [storage] file from config)
    #[arg(long, short, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Load the config the options point at, or defaults if it doesn't exist.
pub fn load_config(options: &GlobalOptions) -> Result<ConfigFile, CliError> {
    Ok(ConfigFile::load_from(&options.config_path())?)
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
