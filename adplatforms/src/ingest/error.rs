//! Ingestion errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorKind;

/// Errors raised while reading a platform listing.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The listing file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The listing file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IngestError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Io { .. } => ErrorKind::Internal,
        }
    }

    /// Path of the listing involved.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
        }
    }
}
