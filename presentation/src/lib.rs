//! Presentation layer for wellness-check
//!
//! This crate contains CLI definitions, output formatters,
//! the progress spinner, and the interactive shell.

pub mod cli;
pub mod config;
pub mod interactive;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::{OutputConfig, ShellConfig};
pub use interactive::{
    questionnaire::{Questionnaire, QuestionnaireOutcome},
    reader::{LineReader, ReadOutcome, RustylineReader},
    shell::{ShellCommand, ShellFlow, WellnessShell, parse_command},
};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
