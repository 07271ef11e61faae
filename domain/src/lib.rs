//! Domain layer for wellness-check
//!
//! This crate contains the questionnaire, the severity scoring rule and the
//! disorder lookup value objects. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Assessment
//!
//! Five fixed questions are answered with [`Response::Yes`], [`Response::No`]
//! or [`Response::Unsure`]. The number of "yes" answers alone decides the
//! [`Severity`]:
//!
//! - **High**: 3 or more
//! - **Medium**: 1 or 2
//! - **Low**: none
//!
//! ## Disorder Lookup
//!
//! A [`SearchTerm`] is resolved to a [`DisorderRecord`] by a remote directory.
//! Any failure collapses into the same guidance message.

pub mod assessment;
pub mod config;
pub mod core;
pub mod disorder;

// Re-export commonly used types
pub use assessment::{
    classify::{classify, yes_count},
    question::{QUESTION_COUNT, Question},
    response::Response,
    result::AssessmentResult,
    session::AssessmentSession,
    severity::{REMEDY_COUNT, Severity},
};
pub use config::OutputFormat;
pub use core::error::ValidationError;
pub use disorder::{
    EXAMPLE_TERMS, NOT_FOUND_GUIDANCE, SEARCH_TIPS, record::DisorderRecord,
    search_term::SearchTerm, session::DisorderSearchSession,
};
