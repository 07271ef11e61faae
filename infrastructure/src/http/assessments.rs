//! Remote scoring: `POST /api/assessments`

use super::WellnessApiClient;
use super::error::service_error;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;
use wellness_application::{ScoringService, ServiceError};
use wellness_domain::{AssessmentResult, QUESTION_COUNT, Response};

const ASSESSMENTS_PATH: &str = "api/assessments";

#[derive(Debug, Serialize)]
struct AssessmentRequest<'a> {
    answers: &'a [Response; QUESTION_COUNT],
}

#[async_trait]
impl ScoringService for WellnessApiClient {
    async fn score(
        &self,
        answers: &[Response; QUESTION_COUNT],
    ) -> Result<AssessmentResult, ServiceError> {
        let url = self
            .endpoint(ASSESSMENTS_PATH)
            .map_err(|e| ServiceError::Connection(e.to_string()))?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&AssessmentRequest { answers })
            .send()
            .await
            .map_err(service_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<AssessmentResult>()
            .await
            .map_err(service_error)
    }
}
