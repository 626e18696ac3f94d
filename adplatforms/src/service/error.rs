//! Service error types.

use std::fmt;

use crate::error::ErrorKind;
use crate::ingest::IngestError;
use crate::location::IndexError;
use crate::query::QueryError;

/// Errors that can occur during service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Replacement data was rejected by the index
    Index(IndexError),
    /// The platform listing could not be read
    Ingest(IngestError),
    /// A query could not be answered
    Query(QueryError),
    /// The operation panicked; carries the panic message
    Panicked(String),
}

impl ServiceError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Index(e) => e.kind(),
            Self::Ingest(e) => e.kind(),
            Self::Query(e) => e.kind(),
            Self::Panicked(_) => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(e) => write!(f, "{}", e),
            Self::Ingest(e) => write!(f, "{}", e),
            Self::Query(e) => write!(f, "{}", e),
            Self::Panicked(msg) => write!(f, "operation panicked: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Index(e) => Some(e),
            Self::Ingest(e) => Some(e),
            Self::Query(e) => Some(e),
            Self::Panicked(_) => None,
        }
    }
}

impl From<IndexError> for ServiceError {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}

impl From<IngestError> for ServiceError {
    fn from(e: IngestError) -> Self {
        Self::Ingest(e)
    }
}

impl From<QueryError> for ServiceError {
    fn from(e: QueryError) -> Self {
        Self::Query(e)
    }
}
