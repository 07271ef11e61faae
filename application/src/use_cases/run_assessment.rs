//! Run Assessment use case
//!
//! Validates a completed questionnaire, asks the remote scoring service for a
//! classification and falls back to the local scoring rule when the remote
//! call fails or its reply disagrees with that rule. The fallback is never
//! surfaced as an error.

use crate::ports::progress::{NoProgress, ProgressNotifier, RequestKind};
use crate::ports::scoring_service::ScoringService;
use crate::ports::service_error::ServiceError;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use wellness_domain::{
    AssessmentResult, AssessmentSession, QUESTION_COUNT, REMEDY_COUNT, Response, Severity,
    ValidationError, classify, yes_count,
};

/// Errors that can occur when submitting an assessment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunAssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Classified by the remote scoring service
    Remote,
    /// Remote call failed; classified locally
    LocalFallback,
}

/// Result of a submission along with its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentOutcome {
    pub result: AssessmentResult,
    pub source: ResultSource,
}

impl AssessmentOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ResultSource::LocalFallback)
    }
}

/// Resolve the remote answer, replacing any failure with the local classification.
///
/// Non-success statuses, transport failures and malformed payloads are all
/// treated the same way. A well-formed reply whose severity disagrees with the
/// answers, or whose remedy list is not exactly five items, counts as malformed.
pub fn resolve_assessment(
    remote: Result<AssessmentResult, ServiceError>,
    answers: &[Response; QUESTION_COUNT],
) -> AssessmentOutcome {
    match remote.and_then(|result| check_remote(result, answers)) {
        Ok(result) => AssessmentOutcome {
            result,
            source: ResultSource::Remote,
        },
        Err(e) => {
            info!("Remote classification unusable, using local classification: {}", e);
            AssessmentOutcome {
                result: classify(answers),
                source: ResultSource::LocalFallback,
            }
        }
    }
}

fn check_remote(
    result: AssessmentResult,
    answers: &[Response; QUESTION_COUNT],
) -> Result<AssessmentResult, ServiceError> {
    let expected = Severity::from_yes_count(yes_count(answers));
    if result.severity != expected {
        return Err(ServiceError::MalformedResponse(format!(
            "severity {} does not match {} yes answers",
            result.severity,
            yes_count(answers)
        )));
    }
    if result.remedies.len() != REMEDY_COUNT {
        return Err(ServiceError::MalformedResponse(format!(
            "expected {} remedies, got {}",
            REMEDY_COUNT,
            result.remedies.len()
        )));
    }
    Ok(result)
}

/// Use case for submitting an assessment
pub struct RunAssessmentUseCase<S: ScoringService + 'static> {
    scoring: Arc<S>,
}

impl<S: ScoringService + 'static> RunAssessmentUseCase<S> {
    pub fn new(scoring: Arc<S>) -> Self {
        Self { scoring }
    }

    /// Submit with default (no-op) progress
    pub async fn submit(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<AssessmentOutcome, RunAssessmentError> {
        self.submit_with_progress(session, &NoProgress).await
    }

    /// Submit with progress callbacks.
    ///
    /// An incomplete session is rejected before any request is issued. On
    /// success the result is also stored in the session.
    pub async fn submit_with_progress(
        &self,
        session: &mut AssessmentSession,
        progress: &dyn ProgressNotifier,
    ) -> Result<AssessmentOutcome, RunAssessmentError> {
        session.ensure_complete()?;

        let answers = session.answers();
        debug!("Submitting answers: {:?}", answers);

        info!("Requesting remote classification");
        progress.on_request_start(RequestKind::Scoring);
        let remote = self.scoring.score(&answers).await;
        progress.on_request_complete(RequestKind::Scoring, remote.is_ok());

        let outcome = resolve_assessment(remote, &answers);
        if outcome.is_fallback() {
            progress.on_fallback();
        }
        info!(
            "Assessment classified as {} ({:?})",
            outcome.result.severity, outcome.source
        );

        session.set_result(outcome.result.clone());
        Ok(outcome)
    }
}
