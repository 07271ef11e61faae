//! Assessment result value object

use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Outcome of one assessment submission.
///
/// Produced fresh on each submission and immutable once created. On the wire
/// the message field is called `result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Summary message for the user
    #[serde(rename = "result")]
    pub message: String,
    /// Recommended actions, in display order
    pub remedies: Vec<String>,
    pub severity: Severity,
}

impl AssessmentResult {
    /// Build the canonical result for a severity
    pub fn for_severity(severity: Severity) -> Self {
        Self {
            message: severity.message().to_string(),
            remedies: severity.remedies().iter().map(|r| r.to_string()).collect(),
            severity,
        }
    }
}
