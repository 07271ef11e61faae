//! Application layer for wellness-check
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use ports::{
    disorder_directory::DisorderDirectory,
    progress::{NoProgress, ProgressNotifier, RequestKind},
    scoring_service::ScoringService,
    service_error::ServiceError,
};
pub use use_cases::run_assessment::{
    AssessmentOutcome, ResultSource, RunAssessmentError, RunAssessmentUseCase,
    resolve_assessment,
};
pub use use_cases::search_disorder::{SearchDisorderError, SearchDisorderUseCase};
