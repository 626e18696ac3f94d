//! Uniform result envelope returned by the service facade.

use serde::Serialize;

use crate::error::ErrorKind;

/// Outcome category of a service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Ok,
    BadRequest,
    NotFound,
    Internal,
}

impl ResponseStatus {
    /// HTTP status code a transport layer would answer with.
    pub fn http_code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }

    /// Whether this is the success status.
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<ErrorKind> for ResponseStatus {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidInput => Self::BadRequest,
            ErrorKind::NotFound => Self::NotFound,
            ErrorKind::Internal => Self::Internal,
        }
    }
}

/// Status, human-readable description, and optional payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceResponse<T> {
    pub status: ResponseStatus,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

impl<T> ServiceResponse<T> {
    /// Successful response carrying `value`.
    pub fn ok(value: T, description: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            description: description.into(),
            value: Some(value),
        }
    }

    /// Failed response without a payload.
    pub fn failure(status: ResponseStatus, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
            value: None,
        }
    }

    /// Whether the call succeeded.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}
