//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod interactive;
mod output;
mod service;

pub use interactive::FileInteractiveConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use service::FileServiceConfig;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wellness_application::ServiceConfig;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote wellness API settings
    pub service: FileServiceConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive shell settings
    pub interactive: FileInteractiveConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.service.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let base_url = self.service.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        Url::parse(base_url)
            .map_err(|e| ConfigValidationError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        Ok(())
    }

    /// Convert to the application-level service configuration
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::new(self.service.base_url.trim())
            .with_timeout_seconds(self.service.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[service]
base_url = "https://wellness.example.org"
timeout_seconds = 15

[output]
format = "json"
color = false

[interactive]
show_progress = false
show_disclaimer = false
history_file = "/tmp/wellness-history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.base_url, "https://wellness.example.org");
        assert_eq!(config.service.timeout_seconds, Some(15));
        assert_eq!(config.output.format, FileOutputFormat::Json);
        assert!(!config.output.color);
        assert!(!config.interactive.show_progress);
        assert!(!config.interactive.show_disclaimer);
        assert!(config.interactive.history_file.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[service]
timeout_seconds = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.service.timeout_seconds, Some(5));
        // Defaults should apply
        assert!(config.output.color);
        assert!(config.interactive.show_progress);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[service]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = FileConfig::default();
        config.service.base_url = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyBaseUrl)
        ));

        config.service.base_url = "localhost without scheme".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_service_config_conversion() {
        let mut config = FileConfig::default();
        config.service.base_url = " http://api.test ".to_string();
        config.service.timeout_seconds = Some(2);

        let service = config.service_config();
        assert_eq!(service.base_url, "http://api.test");
        assert_eq!(service.timeout, Some(Duration::from_secs(2)));
    }
}
