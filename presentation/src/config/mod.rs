//! Presentation-level configuration
//!
//! Configuration for output formatting and interactive shell behavior.

use std::path::PathBuf;
use wellness_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

/// Interactive shell configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Show a spinner while a request is in flight
    pub show_progress: bool,
    /// Print the informational disclaimer in the banner
    pub show_disclaimer: bool,
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_disclaimer: true,
            history_file: None,
        }
    }
}
