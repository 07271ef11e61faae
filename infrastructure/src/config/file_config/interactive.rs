//! Interactive shell configuration from TOML (`[interactive]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw interactive shell configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInteractiveConfig {
    /// Show a spinner while a request is in flight
    pub show_progress: bool,
    /// Print the informational disclaimer in the banner
    pub show_disclaimer: bool,
    /// Path to the line-editor history file
    pub history_file: Option<PathBuf>,
}

impl Default for FileInteractiveConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_disclaimer: true,
            history_file: None,
        }
    }
}

impl FileInteractiveConfig {
    /// Configured history file, or `<data dir>/wellness-check/history.txt`
    pub fn resolved_history_file(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|d| d.join("wellness-check").join("history.txt"))
        })
    }
}
