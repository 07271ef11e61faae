//! Scoring service port
//!
//! Defines the interface for remote assessment classification.

use super::service_error::ServiceError;
use async_trait::async_trait;
use wellness_domain::{AssessmentResult, QUESTION_COUNT, Response};

/// Remote collaborator that classifies a completed assessment.
///
/// The remote is expected to replicate [`wellness_domain::classify`].
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Classify the ordered answers
    async fn score(
        &self,
        answers: &[Response; QUESTION_COUNT],
    ) -> Result<AssessmentResult, ServiceError>;
}
