//! Remote lookup: `GET /api/disorders/search?name=<term>`

use super::WellnessApiClient;
use super::error::service_error;
use async_trait::async_trait;
use tracing::debug;
use wellness_application::{DisorderDirectory, ServiceError};
use wellness_domain::{DisorderRecord, SearchTerm};

const SEARCH_PATH: &str = "api/disorders/search";

#[async_trait]
impl DisorderDirectory for WellnessApiClient {
    async fn find(&self, term: &SearchTerm) -> Result<DisorderRecord, ServiceError> {
        let url = self
            .endpoint(SEARCH_PATH)
            .map_err(|e| ServiceError::Connection(e.to_string()))?;
        debug!("GET {} name={}", url, term);

        let response = self
            .client
            .get(url)
            .query(&[("name", term.as_str())])
            .send()
            .await
            .map_err(service_error)?;

        // Any non-2xx is "not found" to the caller
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<DisorderRecord>()
            .await
            .map_err(service_error)
    }
}
