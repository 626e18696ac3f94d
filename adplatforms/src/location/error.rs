//! Location index errors.

use thiserror::Error;

use super::path::PathError;
use crate::error::ErrorKind;

/// Errors raised while building or reading a location index snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The replacement mapping contained no locations.
    #[error("no data to update")]
    EmptyMapping,

    /// A location key is not a well-formed path.
    #[error("invalid location '{location}': {reason}")]
    InvalidLocation { location: String, reason: PathError },

    /// A location maps to no platforms.
    #[error("location '{0}' has no platforms")]
    EmptyPlatformSet(String),

    /// A location lists an empty or blank platform name.
    #[error("location '{0}' lists an empty platform name")]
    InvalidPlatformName(String),

    /// The snapshot could not be obtained from its source.
    #[error("index unavailable: {0}")]
    Unavailable(String),
}

impl IndexError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyMapping
            | Self::InvalidLocation { .. }
            | Self::EmptyPlatformSet(_)
            | Self::InvalidPlatformName(_) => ErrorKind::InvalidInput,
            Self::Unavailable(_) => ErrorKind::Internal,
        }
    }
}
