//! Application-level configuration.
//!
//! Settings shared by the adapters behind the scoring and lookup ports.

use std::time::Duration;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Remote service configuration.
///
/// One base URL serves both the scoring and the lookup endpoints.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the wellness API
    pub base_url: String,
    /// Maximum time to wait for a response. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set the timeout from an optional number of seconds.
    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }
}
