//! Progress reporting while a remote request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use wellness_application::{ProgressNotifier, RequestKind};

/// Shows a spinner for the loading state of a request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn loading_message(kind: RequestKind) -> &'static str {
        match kind {
            RequestKind::Scoring => "Processing...",
            RequestKind::DisorderLookup => "Searching...",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, kind: RequestKind) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::loading_message(kind));
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_request_complete(&self, _kind: RequestKind, _success: bool) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }
}
