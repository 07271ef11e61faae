//! Self-assessment subdomain.
//!
//! - [`question::Question`]: the fixed, ordered questionnaire
//! - [`response::Response`]: a single answer
//! - [`severity::Severity`]: the scoring bucket with its message and remedies
//! - [`classify::classify`]: the scoring rule
//! - [`session::AssessmentSession`]: caller-owned answers and current result

pub mod classify;
pub mod question;
pub mod response;
pub mod result;
pub mod session;
pub mod severity;
