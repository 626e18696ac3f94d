//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`platforms`] - One-shot platform lookup
//! - [`shell`] - Interactive session over stdin
//! - [`update`] - Load the listing and report the result

pub mod common;
pub mod config;
pub mod platforms;
pub mod shell;
pub mod update;
