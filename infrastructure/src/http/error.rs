//! Error types for the HTTP adapter

use thiserror::Error;
use wellness_application::ServiceError;

/// Errors that can occur while constructing the API client
#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Map a reqwest failure onto the port-level error
pub(super) fn service_error(error: reqwest::Error) -> ServiceError {
    if error.is_timeout() {
        ServiceError::Timeout
    } else if error.is_decode() {
        ServiceError::MalformedResponse(error.to_string())
    } else if let Some(status) = error.status() {
        ServiceError::Status {
            status: status.as_u16(),
        }
    } else {
        ServiceError::Connection(error.to_string())
    }
}
