//! Caller-owned state of the disorder search view.

use super::record::DisorderRecord;

/// What the search view currently shows.
///
/// Starting a search discards the previous record and error. Responses are
/// applied in the order they are handed in, so the last one wins.
#[derive(Debug, Clone, Default)]
pub struct DisorderSearchSession {
    term: String,
    record: Option<DisorderRecord>,
    error: Option<String>,
}

impl DisorderSearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new search for `term`, clearing the previous outcome
    pub fn begin(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.record = None;
        self.error = None;
    }

    pub fn succeed(&mut self, record: DisorderRecord) {
        self.record = Some(record);
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.record = None;
        self.error = Some(message.into());
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn record(&self) -> Option<&DisorderRecord> {
        self.record.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True before any search has produced an outcome
    pub fn is_idle(&self) -> bool {
        self.record.is_none() && self.error.is_none()
    }
}
