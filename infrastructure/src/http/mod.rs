//! HTTP adapter for the wellness API
//!
//! [`WellnessApiClient`] implements both remote ports against one base URL:
//!
//! - `POST {base}/api/assessments`: [`ScoringService`](wellness_application::ScoringService)
//! - `GET {base}/api/disorders/search?name=<term>`: [`DisorderDirectory`](wellness_application::DisorderDirectory)

mod assessments;
mod disorders;
mod error;

#[cfg(test)]
mod test_server;

pub use error::ApiClientError;

use reqwest::{Client, Url};
use tracing::info;
use wellness_application::ServiceConfig;

const USER_AGENT: &str = concat!("wellness-check/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed client for the wellness API
#[derive(Debug, Clone)]
pub struct WellnessApiClient {
    client: Client,
    base_url: Url,
}

impl WellnessApiClient {
    /// Build a client from the service configuration
    pub fn new(config: &ServiceConfig) -> Result<Self, ApiClientError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiClientError::Build)?;

        info!("WellnessApiClient initialized for {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiClientError::InvalidBaseUrl(format!("{}: {}", path, e)))
    }
}

/// Parse a base URL so that relative endpoint paths extend it rather than
/// replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, ApiClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiClientError::InvalidBaseUrl("empty base URL".to_string()));
    }
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Url::parse(&with_slash).map_err(|e| ApiClientError::InvalidBaseUrl(format!("{}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let client =
            WellnessApiClient::new(&ServiceConfig::new("http://api.test/wellness")).unwrap();
        let url = client.endpoint("api/assessments").unwrap();
        assert_eq!(url.as_str(), "http://api.test/wellness/api/assessments");
    }

    #[test]
    fn test_endpoint_on_default_base() {
        let client = WellnessApiClient::new(&ServiceConfig::default()).unwrap();
        let url = client.endpoint("api/disorders/search").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/disorders/search");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            WellnessApiClient::new(&ServiceConfig::new("not a url")),
            Err(ApiClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            WellnessApiClient::new(&ServiceConfig::new("  ")),
            Err(ApiClientError::InvalidBaseUrl(_))
        ));
    }
}
