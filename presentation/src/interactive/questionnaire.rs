//! Walks the user through the five assessment questions

use super::reader::{LineReader, ReadOutcome};
use crate::output::console::ConsoleFormatter;
use std::io::{self, Write};
use wellness_domain::{AssessmentSession, Question, Response};

/// How a questionnaire run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionnaireOutcome {
    /// Every question has an answer
    Completed,
    /// The user interrupted or input ended early
    Aborted,
}

pub struct Questionnaire;

impl Questionnaire {
    /// Ask every question in order, recording answers into `session`.
    ///
    /// Invalid input re-asks the same question. Answers recorded before an
    /// abort are kept.
    pub fn run(
        reader: &mut dyn LineReader,
        out: &mut dyn Write,
        session: &mut AssessmentSession,
    ) -> io::Result<QuestionnaireOutcome> {
        for question in Question::all() {
            writeln!(out, "{}", ConsoleFormatter::format_question(&question))?;

            let answer = loop {
                match reader.read_line("> ") {
                    ReadOutcome::Line(line) => match line.parse::<Response>() {
                        Ok(answer) => break answer,
                        Err(msg) => writeln!(out, "{}", ConsoleFormatter::format_error(&msg))?,
                    },
                    ReadOutcome::Interrupted | ReadOutcome::Eof => {
                        return Ok(QuestionnaireOutcome::Aborted);
                    }
                }
            };

            session
                .record_response(question.index(), answer)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        }

        Ok(QuestionnaireOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::reader::ScriptedReader;

    #[test]
    fn test_completes_with_valid_answers() {
        let mut reader = ScriptedReader::new(&["yes", "y", "no", "unsure", "N"]);
        let mut out = Vec::new();
        let mut session = AssessmentSession::new();

        let outcome = Questionnaire::run(&mut reader, &mut out, &mut session).unwrap();

        assert_eq!(outcome, QuestionnaireOutcome::Completed);
        assert_eq!(
            session.answers(),
            [
                Response::Yes,
                Response::Yes,
                Response::No,
                Response::Unsure,
                Response::No
            ]
        );
    }

    #[test]
    fn test_invalid_answer_is_asked_again() {
        let mut reader = ScriptedReader::new(&["maybe", "yes", "no", "no", "no", "no"]);
        let mut out = Vec::new();
        let mut session = AssessmentSession::new();

        let outcome = Questionnaire::run(&mut reader, &mut out, &mut session).unwrap();

        assert_eq!(outcome, QuestionnaireOutcome::Completed);
        assert_eq!(session.response(0), Some(Response::Yes));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Invalid response: maybe"));
    }

    #[test]
    fn test_eof_aborts_and_keeps_partial_answers() {
        let mut reader = ScriptedReader::new(&["yes", "no"]);
        let mut out = Vec::new();
        let mut session = AssessmentSession::new();

        let outcome = Questionnaire::run(&mut reader, &mut out, &mut session).unwrap();

        assert_eq!(outcome, QuestionnaireOutcome::Aborted);
        assert_eq!(session.answered_count(), 2);
        assert!(!session.is_complete());
    }
}
