//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show`, and `config init`.

use clap::Subcommand;

use adplatforms::config::ConfigFile;

use super::common::{load_config, GlobalOptions};
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration as INI
    ///
    /// Values missing from the file are shown with their defaults.
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(options: &GlobalOptions, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(options),
        ConfigCommands::Show => run_show(options),
        ConfigCommands::Init { force } => run_init(options, force),
    }
}

/// Show the configuration file path.
fn run_path(options: &GlobalOptions) -> Result<(), CliError> {
    println!("{}", options.config_path().display());
    Ok(())
}

/// Print the effective configuration.
fn run_show(options: &GlobalOptions) -> Result<(), CliError> {
    let config = load_config(options)?;
    print!("{}", config.to_ini_string());
    Ok(())
}

/// Write the default configuration.
fn run_init(options: &GlobalOptions, force: bool) -> Result<(), CliError> {
    let path = options.config_path();

    if force {
        ConfigFile::default().save_to(&path)?;
        println!("Wrote default configuration to {}", path.display());
    } else if ConfigFile::ensure_exists_at(&path)? {
        println!("Created {}", path.display());
    } else {
        println!("Configuration already exists at {}", path.display());
        println!("Use --force to overwrite it with defaults.");
    }
    Ok(())
}
