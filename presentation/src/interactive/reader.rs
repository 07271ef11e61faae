//! Line input for the interactive front end

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing::warn;

/// Result of reading one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D or a closed input
    Eof,
}

/// Source of user input lines
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome;

    /// Remember a line for history navigation
    fn add_history(&mut self, _line: &str) {}
}

/// rustyline-backed reader with optional persistent history
pub struct RustylineReader {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl RustylineReader {
    pub fn new(history_file: Option<PathBuf>) -> rustyline::Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(ref path) = history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            // Missing history on first run is expected
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            history_file,
        })
    }

    pub fn save_history(&mut self) {
        if let Some(ref path) = self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                warn!("Failed to save history to {}: {}", path.display(), e);
            }
        }
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &str) -> ReadOutcome {
        match self.editor.readline(prompt) {
            Ok(line) => ReadOutcome::Line(line),
            Err(ReadlineError::Interrupted) => ReadOutcome::Interrupted,
            Err(ReadlineError::Eof) => ReadOutcome::Eof,
            Err(err) => {
                warn!("Readline error: {:?}", err);
                ReadOutcome::Eof
            }
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Reader that replays a fixed script, for tests
#[cfg(test)]
pub(crate) struct ScriptedReader {
    lines: std::collections::VecDeque<ReadOutcome>,
}

#[cfg(test)]
impl ScriptedReader {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| ReadOutcome::Line(l.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl LineReader for ScriptedReader {
    fn read_line(&mut self, _prompt: &str) -> ReadOutcome {
        self.lines.pop_front().unwrap_or(ReadOutcome::Eof)
    }
}
