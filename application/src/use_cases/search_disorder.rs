//! Search Disorder use case
//!
//! Looks up a disorder by name. Every failure, whether the directory has no
//! match or the request never completed, collapses into the same guidance.

use crate::ports::disorder_directory::DisorderDirectory;
use crate::ports::progress::{NoProgress, ProgressNotifier, RequestKind};
use crate::ports::service_error::ServiceError;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use wellness_domain::{
    DisorderRecord, DisorderSearchSession, NOT_FOUND_GUIDANCE, SearchTerm, ValidationError,
};

/// Errors that can occur during a disorder search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchDisorderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{guidance}")]
    NotFound { guidance: String },
}

impl SearchDisorderError {
    fn not_found() -> Self {
        SearchDisorderError::NotFound {
            guidance: NOT_FOUND_GUIDANCE.to_string(),
        }
    }
}

/// Use case for looking up a disorder
pub struct SearchDisorderUseCase<D: DisorderDirectory + 'static> {
    directory: Arc<D>,
}

impl<D: DisorderDirectory + 'static> SearchDisorderUseCase<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Search with default (no-op) progress
    pub async fn execute(&self, term: &str) -> Result<DisorderRecord, SearchDisorderError> {
        self.execute_with_progress(term, &NoProgress).await
    }

    /// Search with progress callbacks.
    ///
    /// Blank input is rejected before any request is issued.
    pub async fn execute_with_progress(
        &self,
        term: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<DisorderRecord, SearchDisorderError> {
        let term = SearchTerm::parse(term)?;

        info!("Looking up disorder '{}'", term);
        progress.on_request_start(RequestKind::DisorderLookup);
        let found = self.directory.find(&term).await;
        progress.on_request_complete(RequestKind::DisorderLookup, found.is_ok());

        found.map_err(|e| {
            info!("Lookup for '{}' failed: {}", term, failure_reason(&e));
            SearchDisorderError::not_found()
        })
    }

    /// Run a search and apply its outcome to the caller's view state.
    ///
    /// The previous record and error are discarded as soon as the search starts.
    pub async fn search_into(
        &self,
        session: &mut DisorderSearchSession,
        term: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<(), SearchDisorderError> {
        session.begin(term.trim());
        match self.execute_with_progress(term, progress).await {
            Ok(record) => {
                session.succeed(record);
                Ok(())
            }
            Err(e) => {
                session.fail(e.to_string());
                Err(e)
            }
        }
    }
}

/// Log-only description of a failed lookup; the user always sees the same guidance
fn failure_reason(error: &ServiceError) -> String {
    match error.status() {
        Some(404) => "no matching disorder".to_string(),
        Some(status) => format!("directory answered with status {}", status),
        None if error.is_timeout() => "directory did not answer in time".to_string(),
        None => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Mocks ====================

    /// In-memory directory, case-insensitive on the term
    struct MockDirectory {
        records: HashMap<String, DisorderRecord>,
        failure: Option<ServiceError>,
        calls: AtomicUsize,
    }

    impl MockDirectory {
        fn with_depression() -> Self {
            let mut records = HashMap::new();
            records.insert(
                "depression".to_string(),
                DisorderRecord::new(
                    "Depression",
                    "A mood disorder causing persistent sadness.",
                    vec!["Psychotherapy".to_string(), "Regular exercise".to_string()],
                ),
            );
            Self {
                records,
                failure: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(error: ServiceError) -> Self {
            Self {
                records: HashMap::new(),
                failure: Some(error),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DisorderDirectory for MockDirectory {
        async fn find(&self, term: &SearchTerm) -> Result<DisorderRecord, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(e) = &self.failure {
                return Err(e.clone());
            }
            self.records
                .get(&term.as_str().to_lowercase())
                .cloned()
                .ok_or(ServiceError::Status { status: 404 })
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_blank_terms_are_rejected_without_request() {
        let directory = Arc::new(MockDirectory::with_depression());
        let use_case = SearchDisorderUseCase::new(directory.clone());

        for term in ["", "   "] {
            let err = use_case.execute(term).await.unwrap_err();
            assert_eq!(
                err,
                SearchDisorderError::Validation(ValidationError::EmptySearchTerm)
            );
        }
        assert_eq!(directory.calls(), 0);
    }

    #[tokio::test]
    async fn test_found_record_has_remedies() {
        let use_case = SearchDisorderUseCase::new(Arc::new(MockDirectory::with_depression()));

        let record = use_case.execute("  Depression ").await.unwrap();

        assert_eq!(record.name, "Depression");
        assert!(!record.remedies.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_term_yields_guidance() {
        let use_case = SearchDisorderUseCase::new(Arc::new(MockDirectory::with_depression()));

        let err = use_case.execute("not-a-real-disorder").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Disorder not found. Try: depression, anxiety, or bipolar"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_indistinguishable_from_not_found() {
        let unreachable = SearchDisorderUseCase::new(Arc::new(MockDirectory::failing(
            ServiceError::Connection("refused".to_string()),
        )));
        let missing = SearchDisorderUseCase::new(Arc::new(MockDirectory::with_depression()));

        let a = unreachable.execute("depression").await.unwrap_err();
        let b = missing.execute("bipolar").await.unwrap_err();

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_search_into_replaces_previous_outcome() {
        let use_case = SearchDisorderUseCase::new(Arc::new(MockDirectory::with_depression()));
        let mut session = DisorderSearchSession::new();

        use_case
            .search_into(&mut session, "depression", &NoProgress)
            .await
            .unwrap();
        assert!(session.record().is_some());

        let result = use_case
            .search_into(&mut session, "anxiety", &NoProgress)
            .await;
        assert!(result.is_err());
        assert!(session.record().is_none());
        assert_eq!(session.error(), Some(NOT_FOUND_GUIDANCE));
        assert_eq!(session.term(), "anxiety");
    }

    #[tokio::test]
    async fn test_search_into_blank_term_shows_validation_message() {
        let use_case = SearchDisorderUseCase::new(Arc::new(MockDirectory::with_depression()));
        let mut session = DisorderSearchSession::new();

        let _ = use_case.search_into(&mut session, " ", &NoProgress).await;

        assert_eq!(session.error(), Some("Please enter a disorder name"));
    }

    #[tokio::test]
    async fn test_timeout_collapses_to_guidance() {
        let directory = Arc::new(MockDirectory::failing(ServiceError::Timeout));
        let use_case = SearchDisorderUseCase::new(directory.clone());

        let err = use_case.execute("depression").await.unwrap_err();

        assert_eq!(err.to_string(), NOT_FOUND_GUIDANCE);
        assert_eq!(directory.calls(), 1);
    }

    #[test]
    fn test_failure_reason() {
        assert_eq!(
            failure_reason(&ServiceError::Status { status: 404 }),
            "no matching disorder"
        );
        assert_eq!(
            failure_reason(&ServiceError::Status { status: 502 }),
            "directory answered with status 502"
        );
        assert_eq!(
            failure_reason(&ServiceError::Timeout),
            "directory did not answer in time"
        );
        assert_eq!(
            failure_reason(&ServiceError::Connection("refused".to_string())),
            "Connection error: refused"
        );
    }
}
