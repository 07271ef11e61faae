//! Domain error types

use crate::assessment::question::QUESTION_COUNT;
use thiserror::Error;

/// Input that cannot be acted on.
///
/// Validation errors are recovered locally and shown as inline guidance.
/// No request is ever issued for an input that fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please answer all {required} questions")]
    IncompleteAssessment { answered: usize, required: usize },

    #[error("Please enter a disorder name")]
    EmptySearchTerm,

    #[error("Unknown question index: {0}")]
    UnknownQuestion(usize),
}

impl ValidationError {
    /// Incomplete-assessment error for the fixed questionnaire
    pub fn incomplete(answered: usize) -> Self {
        ValidationError::IncompleteAssessment {
            answered,
            required: QUESTION_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_message() {
        let error = ValidationError::incomplete(2);
        assert_eq!(error.to_string(), "Please answer all 5 questions");
    }

    #[test]
    fn test_empty_search_message() {
        assert_eq!(
            ValidationError::EmptySearchTerm.to_string(),
            "Please enter a disorder name"
        );
    }

    #[test]
    fn test_unknown_question_message() {
        assert_eq!(
            ValidationError::UnknownQuestion(7).to_string(),
            "Unknown question index: 7"
        );
    }
}
