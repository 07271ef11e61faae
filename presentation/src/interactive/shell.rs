//! Interactive shell combining the assessment and the disorder lookup

use super::questionnaire::{Questionnaire, QuestionnaireOutcome};
use super::reader::{LineReader, ReadOutcome, RustylineReader};
use crate::config::{OutputConfig, ShellConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use std::io::{self, Write};
use std::sync::Arc;
use wellness_application::{
    DisorderDirectory, NoProgress, ProgressNotifier, RunAssessmentUseCase, ScoringService,
    SearchDisorderUseCase,
};
use wellness_domain::{AssessmentSession, DisorderSearchSession};

/// A parsed shell input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Assess,
    Search(String),
    Examples,
    Result,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

/// Whether the loop should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Exit,
}

/// Parse one line. Plain text is a search; blank input is ignored.
pub fn parse_command(line: &str) -> Option<ShellCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if !line.starts_with('/') {
        return Some(ShellCommand::Search(line.to_string()));
    }

    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    Some(match cmd {
        "/assess" | "/a" => ShellCommand::Assess,
        "/search" | "/s" => ShellCommand::Search(rest.to_string()),
        "/examples" | "/e" => ShellCommand::Examples,
        "/result" | "/r" => ShellCommand::Result,
        "/reset" => ShellCommand::Reset,
        "/help" | "/h" | "/?" => ShellCommand::Help,
        "/quit" | "/exit" | "/q" => ShellCommand::Quit,
        other => ShellCommand::Unknown(other.to_string()),
    })
}

/// Interactive wellness shell
pub struct WellnessShell<S: ScoringService + 'static, D: DisorderDirectory + 'static> {
    assessment: RunAssessmentUseCase<S>,
    search: SearchDisorderUseCase<D>,
    session: AssessmentSession,
    search_session: DisorderSearchSession,
    config: ShellConfig,
    output: OutputConfig,
}

impl<S: ScoringService + 'static, D: DisorderDirectory + 'static> WellnessShell<S, D> {
    /// Create a new WellnessShell
    pub fn new(scoring: Arc<S>, directory: Arc<D>) -> Self {
        Self {
            assessment: RunAssessmentUseCase::new(scoring),
            search: SearchDisorderUseCase::new(directory),
            session: AssessmentSession::new(),
            search_session: DisorderSearchSession::new(),
            config: ShellConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ShellConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Run the interactive loop on the terminal
    pub async fn run(&mut self) -> rustyline::Result<()> {
        let mut reader = RustylineReader::new(self.config.history_file.clone())?;
        let mut stdout = io::stdout();

        self.print_welcome(&mut stdout)?;

        loop {
            let line = match reader.read_line("wellness> ") {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => {
                    println!("^C");
                    continue;
                }
                ReadOutcome::Eof => {
                    println!("Bye!");
                    break;
                }
            };

            if !line.trim().is_empty() {
                reader.add_history(line.trim());
            }

            if self.handle_line(&line, &mut reader, &mut stdout).await? == ShellFlow::Exit {
                break;
            }
        }

        reader.save_history();
        Ok(())
    }

    /// Handle a single input line
    pub async fn handle_line(
        &mut self,
        line: &str,
        reader: &mut dyn LineReader,
        out: &mut dyn Write,
    ) -> io::Result<ShellFlow> {
        let Some(command) = parse_command(line) else {
            return Ok(ShellFlow::Continue);
        };

        match command {
            ShellCommand::Assess => self.assess(reader, out).await?,
            ShellCommand::Search(term) => self.search(&term, out).await?,
            ShellCommand::Examples => writeln!(out, "{}", ConsoleFormatter::format_examples())?,
            ShellCommand::Result => self.print_status(out)?,
            ShellCommand::Reset => {
                self.session.reset();
                writeln!(out, "Answers cleared.")?;
            }
            ShellCommand::Help => self.print_help(out)?,
            ShellCommand::Quit => {
                writeln!(out, "Bye!")?;
                return Ok(ShellFlow::Exit);
            }
            ShellCommand::Unknown(cmd) => {
                writeln!(
                    out,
                    "{}",
                    ConsoleFormatter::format_error(&format!(
                        "Unknown command: {}. Type /help for commands.",
                        cmd
                    ))
                )?;
            }
        }

        Ok(ShellFlow::Continue)
    }

    /// Current assessment state
    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    /// Current search state
    pub fn search_session(&self) -> &DisorderSearchSession {
        &self.search_session
    }

    async fn assess(&mut self, reader: &mut dyn LineReader, out: &mut dyn Write) -> io::Result<()> {
        self.session.reset();

        if Questionnaire::run(reader, out, &mut self.session)? == QuestionnaireOutcome::Aborted {
            writeln!(out, "Assessment cancelled.")?;
            return Ok(());
        }

        let progress = self.progress();
        match self
            .assessment
            .submit_with_progress(&mut self.session, progress.as_ref())
            .await
        {
            Ok(outcome) => writeln!(out, "{}", self.render_result(&outcome.result))?,
            Err(e) => writeln!(out, "{}", ConsoleFormatter::format_error(&e.to_string()))?,
        }
        Ok(())
    }

    async fn search(&mut self, term: &str, out: &mut dyn Write) -> io::Result<()> {
        let progress = self.progress();
        let _ = self
            .search
            .search_into(&mut self.search_session, term, progress.as_ref())
            .await;

        if let Some(record) = self.search_session.record() {
            let rendered = if self.output.is_json() {
                ConsoleFormatter::format_json(record)
            } else {
                ConsoleFormatter::format_disorder(record)
            };
            writeln!(out, "{}", rendered)?;
        } else if let Some(error) = self.search_session.error() {
            writeln!(out, "{}", ConsoleFormatter::format_error(error))?;
        }
        Ok(())
    }

    /// Last assessment result and the state of the search view
    fn print_status(&self, out: &mut dyn Write) -> io::Result<()> {
        match self.session.result() {
            Some(result) => writeln!(out, "{}", self.render_result(result))?,
            None => writeln!(out, "No assessment result yet. Use /assess to start.")?,
        }

        if self.search_session.is_idle() {
            return writeln!(out, "{}", ConsoleFormatter::format_search_tips());
        }
        writeln!(out, "Last search: {}", self.search_session.term())?;
        if let Some(record) = self.search_session.record() {
            writeln!(out, "Found: {}", record.name)?;
        } else if let Some(error) = self.search_session.error() {
            writeln!(out, "{}", ConsoleFormatter::format_error(error))?;
        }
        Ok(())
    }

    fn render_result(&self, result: &wellness_domain::AssessmentResult) -> String {
        if self.output.is_json() {
            ConsoleFormatter::format_json(result)
        } else {
            ConsoleFormatter::format_assessment(result)
        }
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.config.show_progress && !self.output.is_json() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }

    fn print_welcome(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", ConsoleFormatter::banner(self.config.show_disclaimer))?;
        writeln!(out)?;
        self.print_help(out)
    }

    fn print_help(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Commands:")?;
        writeln!(out, "  /assess, /a         - Answer the five questions")?;
        writeln!(out, "  /search <name>, /s  - Look up a disorder")?;
        writeln!(out, "  /examples, /e       - Show example search terms")?;
        writeln!(out, "  /result, /r         - Show the last result and search")?;
        writeln!(out, "  /reset              - Clear answers and result")?;
        writeln!(out, "  /help, /h, /?       - Show this help")?;
        writeln!(out, "  /quit, /q           - Exit")?;
        writeln!(out)?;
        writeln!(out, "Any other text is searched as a disorder name.")?;
        writeln!(out)
    }
}
