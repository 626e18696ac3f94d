//! Error classification shared by every layer.

use serde::Serialize;
use std::fmt;

/// Coarse error category reported to callers.
///
/// Each module keeps its own error enum; this is the common vocabulary the
/// service boundary uses to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The caller supplied unusable data (for example an empty replacement).
    InvalidInput,
    /// A required resource, such as the ingestion file, does not exist.
    NotFound,
    /// Anything unexpected.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "invalid input",
            Self::NotFound => "not found",
            Self::Internal => "internal error",
        };
        f.write_str(name)
    }
}
