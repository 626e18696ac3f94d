//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::io;
use std::process;

use adplatforms::config::ConfigFileError;
use adplatforms::service::{ResponseStatus, ServiceResponse};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// A service call returned a non-OK response
    Service {
        status: ResponseStatus,
        description: String,
    },
    /// Failed to render output
    Output(String),
    /// Terminal I/O failed
    Io(io::Error),
}

impl CliError {
    /// Convert a failed service response into an error.
    pub fn from_response<T>(response: ServiceResponse<T>) -> Self {
        CliError::Service {
            status: response.status,
            description: response.description,
        }
    }

    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Service {
                status: ResponseStatus::NotFound,
                ..
            } => {
                eprintln!();
                eprintln!("The platform listing file does not exist. Either:");
                eprintln!("  1. Pass one explicitly: adplatforms <command> --file <PATH>");
                eprintln!("  2. Set [storage] file in the config (adplatforms config path)");
            }
            CliError::Service {
                status: ResponseStatus::BadRequest,
                ..
            } => {
                eprintln!();
                eprintln!("Listing lines look like: Platform name: /ru/svrd, /ru/msk");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Service {
                status,
                description,
            } => write!(f, "{} (status {})", description, status.http_code()),
            CliError::Output(msg) => write!(f, "Failed to render output: {}", msg),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_service_error() {
        let response: ServiceResponse<()> =
            ServiceResponse::failure(ResponseStatus::BadRequest, "No data to update");
        let err = CliError::from_response(response);
        assert_eq!(err.to_string(), "No data to update (status 400)");
    }

    #[test]
    fn test_from_config_error() {
        let err: CliError = ConfigFileError::WriteError("disk full".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error as _;

        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("pipe closed"));
    }
}
