//! CLI entrypoint for wellness-check
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wellness_application::{
    NoProgress, ProgressNotifier, RunAssessmentUseCase, SearchDisorderUseCase,
};
use wellness_domain::{AssessmentSession, QUESTION_COUNT, Response, ValidationError};
use wellness_infrastructure::{ConfigLoader, WellnessApiClient};
use wellness_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter, Questionnaire,
    QuestionnaireOutcome, RustylineReader, ShellConfig, WellnessShell,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    info!("Starting wellness-check");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
    }
    config.validate().context("Invalid configuration")?;
    debug!("Effective configuration: {:?}", config);

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .unwrap_or(config.output.format),
        color: config.output.color && !cli.no_color,
    };
    if !output.color || output.is_json() {
        colored::control::set_override(false);
    }

    let shell_config = ShellConfig {
        show_progress: config.interactive.show_progress && !cli.quiet,
        show_disclaimer: config.interactive.show_disclaimer,
        history_file: config.interactive.resolved_history_file(),
    };

    // === Dependency Injection ===
    let client = Arc::new(WellnessApiClient::new(&config.service_config())?);
    debug!("Using wellness API at {}", client.base_url());

    match cli.command {
        Some(Command::Assess { answers }) => {
            assess(client, answers, &output, &shell_config).await
        }
        Some(command @ Command::Search { .. }) => {
            let term = command.search_term().unwrap_or_default();
            search(client, &term, &output, &shell_config).await
        }
        Some(Command::Examples) => {
            println!("{}", ConsoleFormatter::format_examples());
            Ok(())
        }
        None => {
            let mut shell = WellnessShell::new(client.clone(), client)
                .with_config(shell_config)
                .with_output(output);
            shell.run().await?;
            Ok(())
        }
    }
}

fn progress_for(output: &OutputConfig, shell_config: &ShellConfig) -> Box<dyn ProgressNotifier> {
    if shell_config.show_progress && !output.is_json() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(NoProgress)
    }
}

async fn assess(
    client: Arc<WellnessApiClient>,
    answers: Vec<Response>,
    output: &OutputConfig,
    shell_config: &ShellConfig,
) -> Result<()> {
    let mut session = AssessmentSession::new();

    if answers.is_empty() {
        if shell_config.show_disclaimer && !output.is_json() {
            println!("{}\n", ConsoleFormatter::disclaimer());
        }
        let mut reader = RustylineReader::new(None)?;
        let outcome = Questionnaire::run(&mut reader, &mut io::stdout(), &mut session)?;
        if outcome == QuestionnaireOutcome::Aborted {
            bail!(ValidationError::incomplete(session.answered_count()));
        }
    } else {
        if answers.len() > QUESTION_COUNT {
            bail!(
                "Expected {} answers, got {}",
                QUESTION_COUNT,
                answers.len()
            );
        }
        for (index, answer) in answers.into_iter().enumerate() {
            session.record_response(index, answer)?;
        }
    }

    let progress = progress_for(output, shell_config);
    let outcome = RunAssessmentUseCase::new(client)
        .submit_with_progress(&mut session, progress.as_ref())
        .await?;

    if output.is_json() {
        println!("{}", ConsoleFormatter::format_json(&outcome.result));
    } else {
        println!("{}", ConsoleFormatter::format_assessment(&outcome.result));
    }
    Ok(())
}

async fn search(
    client: Arc<WellnessApiClient>,
    term: &str,
    output: &OutputConfig,
    shell_config: &ShellConfig,
) -> Result<()> {
    let progress = progress_for(output, shell_config);
    let record = SearchDisorderUseCase::new(client)
        .execute_with_progress(term, progress.as_ref())
        .await?;

    if output.is_json() {
        println!("{}", ConsoleFormatter::format_json(&record));
    } else {
        println!("{}", ConsoleFormatter::format_disorder(&record));
    }
    Ok(())
}
