//! Question value object

use serde::Serialize;

/// Number of questions in the assessment
pub const QUESTION_COUNT: usize = 5;

const PROMPTS: [&str; QUESTION_COUNT] = [
    "Have you felt sad or hopeless recently?",
    "Have you lost interest in activities you used to enjoy?",
    "Have you had changes in appetite or weight?",
    "Do you have trouble sleeping?",
    "Do you often feel tired or lack energy?",
];

/// A question of the assessment (Value Object)
///
/// Questions are identified by their position in the fixed sequence and are
/// never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    index: usize,
    prompt: &'static str,
}

impl Question {
    /// Look up a question by its 0-based index
    pub fn get(index: usize) -> Option<Self> {
        PROMPTS.get(index).map(|prompt| Self { index, prompt })
    }

    /// All questions, in order
    pub fn all() -> impl Iterator<Item = Question> {
        PROMPTS
            .iter()
            .enumerate()
            .map(|(index, prompt)| Question { index, prompt })
    }

    /// Get the 0-based index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the prompt text
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt)
    }
}
