//! Console output formatter for assessment results and disorder records

use colored::{ColoredString, Colorize};
use serde::Serialize;
use wellness_domain::{
    AssessmentResult, DisorderRecord, EXAMPLE_TERMS, QUESTION_COUNT, Question, Response,
    SEARCH_TIPS, Severity,
};

const DISCLAIMER: &str = "This tool is for informational purposes only. It is not a substitute \
for professional medical advice, diagnosis, or treatment. Always seek the advice of qualified \
mental health providers.";

const CRISIS_NOTE: &str =
    "If you're experiencing a crisis, please contact emergency services immediately.";

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an assessment result
    pub fn format_assessment(result: &AssessmentResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Assessment Result"));
        output.push('\n');

        output.push_str(&format!("\n{}\n", result.message.bold()));

        output.push_str(&Self::section_header("Recommended Actions"));
        for remedy in &result.remedies {
            output.push_str(&format!("  * {}\n", remedy));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Severity:".cyan().bold(),
            Self::severity_badge(result.severity)
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format a disorder record
    pub fn format_disorder(record: &DisorderRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&record.name));
        output.push('\n');

        output.push_str(&Self::section_header("Description"));
        output.push_str(&record.description);
        output.push('\n');

        output.push_str(&Self::section_header("Treatment Options"));
        for remedy in &record.remedies {
            output.push_str(&format!("  * {}\n", remedy));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format inline guidance for a failed action
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "!".red().bold(), message.red())
    }

    /// Example search terms and tips
    pub fn format_examples() -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Try searching for:".cyan().bold(),
            EXAMPLE_TERMS.join(", ")
        ));

        output.push('\n');
        output.push_str(&Self::format_search_tips());
        output
    }

    /// Hints shown while no search has produced an outcome
    pub fn format_search_tips() -> String {
        let mut output = format!("{}\n", "Search Tips".yellow().bold());
        for tip in SEARCH_TIPS {
            output.push_str(&format!("  * {}\n", tip));
        }
        output
    }

    /// Prompt line for one question, e.g. `[2/5] Do you have trouble sleeping?`
    pub fn format_question(question: &Question) -> String {
        let options = Response::ALL
            .iter()
            .map(|r| r.label())
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "{} {} {}",
            format!("[{}/{}]", question.index() + 1, QUESTION_COUNT).dimmed(),
            question.prompt().bold(),
            format!("({})", options).dimmed()
        )
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Welcome banner for the interactive shell
    pub fn banner(show_disclaimer: bool) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Mental Wellness Checker"));
        output.push_str(&format!(
            "\n{:^60}\n",
            "Assess your mental health and find helpful resources".dimmed()
        ));
        if show_disclaimer {
            output.push_str(&format!("\n{}\n", Self::disclaimer()));
        }
        output
    }

    /// Informational disclaimer and crisis note
    pub fn disclaimer() -> String {
        format!(
            "{}\n{}\n{}",
            "Important Disclaimer".yellow().bold(),
            Self::wrap(DISCLAIMER, 60),
            CRISIS_NOTE.dimmed()
        )
    }

    fn severity_badge(severity: Severity) -> ColoredString {
        let label = severity.as_str().to_uppercase();
        match severity {
            Severity::High => label.red().bold(),
            Severity::Medium => label.yellow().bold(),
            Severity::Low => label.green().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Greedy word wrap at `width` columns
    fn wrap(text: &str, width: usize) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            if !current.is_empty() && current.len() + 1 + word.len() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_assessment_lists_everything() {
        plain();
        let result = AssessmentResult::for_severity(Severity::High);
        let output = ConsoleFormatter::format_assessment(&result);

        assert!(output.contains("You may benefit from professional support."));
        assert!(output.contains("  * Consider therapy"));
        assert!(output.contains("Severity: HIGH"));
    }

    #[test]
    fn test_format_disorder() {
        plain();
        let record = DisorderRecord::new(
            "Anxiety",
            "Excessive worry.",
            vec!["Cognitive behavioral therapy".to_string()],
        );
        let output = ConsoleFormatter::format_disorder(&record);

        assert!(output.contains("Anxiety"));
        assert!(output.contains("Excessive worry."));
        assert!(output.contains("Treatment Options"));
        assert!(output.contains("  * Cognitive behavioral therapy"));
    }

    #[test]
    fn test_format_question() {
        plain();
        let question = Question::get(1).unwrap();
        assert_eq!(
            ConsoleFormatter::format_question(&question),
            "[2/5] Have you lost interest in activities you used to enjoy? (Yes/No/Unsure)"
        );
    }

    #[test]
    fn test_format_json_uses_wire_shape() {
        let result = AssessmentResult::for_severity(Severity::Medium);
        let json = ConsoleFormatter::format_json(&result);
        assert!(json.contains("\"result\": \"Monitor your mental health and practice self-care.\""));
        assert!(json.contains("\"severity\": \"medium\""));
    }

    #[test]
    fn test_format_examples() {
        plain();
        let output = ConsoleFormatter::format_examples();
        assert!(output.contains("depression, anxiety, bipolar"));
        assert!(output.contains("Check spelling if no results appear"));
    }

    #[test]
    fn test_wrap() {
        let wrapped = ConsoleFormatter::wrap("aaa bbb ccc ddd", 7);
        assert_eq!(wrapped, "aaa bbb\nccc ddd");
    }

    #[test]
    fn test_banner_disclaimer_toggle() {
        plain();
        assert!(ConsoleFormatter::banner(true).contains("Important Disclaimer"));
        assert!(!ConsoleFormatter::banner(false).contains("Important Disclaimer"));
    }
}
