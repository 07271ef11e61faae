//! Disorder directory port
//!
//! Defines the interface for looking up disorder descriptions.

use super::service_error::ServiceError;
use async_trait::async_trait;
use wellness_domain::{DisorderRecord, SearchTerm};

/// Remote directory of disorder descriptions and remedies.
///
/// Matching rules (case, fuzziness) belong to the directory.
#[async_trait]
pub trait DisorderDirectory: Send + Sync {
    /// Find the record for a term. Not-found is reported as an error.
    async fn find(&self, term: &SearchTerm) -> Result<DisorderRecord, ServiceError>;
}
