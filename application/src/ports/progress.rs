//! Progress notification port
//!
//! Defines the interface for reporting the loading state of remote requests.

use std::fmt;

/// Which remote request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Scoring,
    DisorderLookup,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Scoring => "scoring",
            RequestKind::DisorderLookup => "disorder lookup",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates while a request is in flight
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, status line, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the request is issued
    fn on_request_start(&self, kind: RequestKind);

    /// Called once the request has resolved, successfully or not
    fn on_request_complete(&self, kind: RequestKind, success: bool);

    /// Called when a scoring failure was replaced by the local result
    fn on_fallback(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _kind: RequestKind) {}
    fn on_request_complete(&self, _kind: RequestKind, _success: bool) {}
}
