//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wellness_domain::Response;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text
    Text,
    /// JSON in the API's wire shape
    Json,
}

impl From<OutputFormat> for wellness_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => wellness_domain::OutputFormat::Text,
            OutputFormat::Json => wellness_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for wellness-check
#[derive(Parser, Debug)]
#[command(name = "wellness-check")]
#[command(author, version, about = "Mental wellness self-assessment and disorder lookup")]
#[command(long_about = r#"
wellness-check runs a five-question self-assessment and looks up
descriptions and treatment options for mental health conditions.

Assessments are scored by the wellness API. If the API cannot be reached
the same scoring rule is applied locally.

Configuration files are loaded from (in priority order):
1. WELLNESS_* environment variables
2. --config <path>      Explicit config file
3. ./wellness.toml      Project-level config
4. ~/.config/wellness-check/config.toml   Global config

Example:
  wellness-check assess
  wellness-check assess -a yes -a yes -a no -a unsure -a no
  wellness-check search depression
  wellness-check            # interactive shell

This tool is for informational purposes only and is not a substitute for
professional medical advice, diagnosis, or treatment.
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Base URL of the wellness API (overrides the config file)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands; without one the interactive shell starts
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Answer the five questions and get a severity assessment
    Assess {
        /// Answers in question order (yes, no or unsure). Prompts interactively when omitted.
        #[arg(short = 'a', long = "answer", value_name = "ANSWER")]
        answers: Vec<Response>,
    },

    /// Look up a disorder by name
    Search {
        /// Disorder name, e.g. depression
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List example search terms and search tips
    Examples,
}

impl Command {
    /// The search term for [`Command::Search`], words joined by spaces
    pub fn search_term(&self) -> Option<String> {
        match self {
            Command::Search { name } => Some(name.join(" ")),
            _ => None,
        }
    }
}
