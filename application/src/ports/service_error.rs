//! Errors reported by remote service adapters

use thiserror::Error;

/// A remote call failed or returned an unexpected shape.
///
/// Assessment submission absorbs these through the local fallback; disorder
/// lookup collapses them into the not-found guidance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unexpected status: {status}")]
    Status { status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl ServiceError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ServiceError::Timeout)
    }

    /// The HTTP status for [`ServiceError::Status`], if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
