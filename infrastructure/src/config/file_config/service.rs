//! Service configuration from TOML (`[service]` section)

use serde::{Deserialize, Serialize};
use wellness_application::config::DEFAULT_BASE_URL;

/// Raw remote service configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL shared by the scoring and lookup endpoints
    pub base_url: String,
    /// Request timeout in seconds (transport default when unset)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}
