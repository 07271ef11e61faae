//! Caller-owned assessment state.

use super::question::QUESTION_COUNT;
use super::response::Response;
use super::result::AssessmentResult;
use crate::core::error::ValidationError;
use std::collections::BTreeMap;

/// Answers collected so far plus the result of the last submission.
///
/// The session is owned by whoever drives the questionnaire and is passed
/// to the use case on submit; there is no process-wide state.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSession {
    responses: BTreeMap<usize, Response>,
    result: Option<AssessmentResult>,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the answer for a question, overwriting any previous answer.
    pub fn record_response(
        &mut self,
        index: usize,
        value: Response,
    ) -> Result<(), ValidationError> {
        if index >= QUESTION_COUNT {
            return Err(ValidationError::UnknownQuestion(index));
        }
        self.responses.insert(index, value);
        Ok(())
    }

    pub fn response(&self, index: usize) -> Option<Response> {
        self.responses.get(&index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    pub fn is_complete(&self) -> bool {
        self.responses.len() == QUESTION_COUNT
    }

    /// Ordered answers for submission; unanswered slots become [`Response::No`].
    pub fn answers(&self) -> [Response; QUESTION_COUNT] {
        let mut answers = [Response::default(); QUESTION_COUNT];
        for (index, slot) in answers.iter_mut().enumerate() {
            if let Some(value) = self.responses.get(&index) {
                *slot = *value;
            }
        }
        answers
    }

    /// Fail with [`ValidationError::IncompleteAssessment`] unless every question is answered.
    pub fn ensure_complete(&self) -> Result<(), ValidationError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(ValidationError::incomplete(self.answered_count()))
        }
    }

    pub fn set_result(&mut self, result: AssessmentResult) {
        self.result = Some(result);
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Clear all answers and discard the current result.
    pub fn reset(&mut self) {
        self.responses.clear();
        self.result = None;
    }
}
