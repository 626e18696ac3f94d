//! adplatforms CLI - Command-line interface
//!
//! This binary answers platform lookups against a listing file and offers a
//! long-lived interactive session over stdin.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::common::GlobalOptions;
use commands::config::ConfigCommands;
use commands::platforms::PlatformsArgs;
use commands::shell::ShellArgs;
use commands::update::UpdateArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "adplatforms")]
#[command(version, about = "Look up advertising platforms by location", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.adplatforms/config.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug-level logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the listing and print one page of matching platforms
    Platforms(PlatformsArgs),

    /// Load the listing and report what the index now holds
    Update(UpdateArgs),

    /// Interactive session: get, update, and clear over stdin
    Shell(ShellArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let options = GlobalOptions {
        config: cli.config,
        debug: cli.debug,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Platforms(args) => commands::platforms::run(&options, args),
        Commands::Update(args) => commands::update::run(&options, args),
        Commands::Shell(args) => commands::shell::run(&options, args),
        Commands::Config { command } => commands::config::run(&options, command),
    }
}
