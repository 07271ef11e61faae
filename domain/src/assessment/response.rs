//! Response value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user's answer to one assessment question.
///
/// Only [`Response::Yes`] affects scoring; [`Response::Unsure`] counts as
/// neither yes nor no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Yes,
    /// Also used for unanswered slots when building the submitted list
    #[default]
    No,
    Unsure,
}

impl Response {
    /// All options, in display order
    pub const ALL: [Response; 3] = [Response::Yes, Response::No, Response::Unsure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Response::Yes => "yes",
            Response::No => "no",
            Response::Unsure => "unsure",
        }
    }

    /// Capitalized label for display
    pub fn label(&self) -> &'static str {
        match self {
            Response::Yes => "Yes",
            Response::No => "No",
            Response::Unsure => "Unsure",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Response::Yes)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Response {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Response::Yes),
            "no" | "n" => Ok(Response::No),
            "unsure" | "u" | "?" => Ok(Response::Unsure),
            _ => Err(format!("Invalid response: {} (expected yes, no or unsure)", s)),
        }
    }
}
