//! Severity bucket of the assessment scoring rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of remedies attached to every result
pub const REMEDY_COUNT: usize = 5;

/// Output bucket of the assessment scoring rule.
///
/// Each severity carries a fixed message and a fixed list of five remedies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Map a count of "yes" answers to a severity.
    ///
    /// Boundaries are inclusive: `>= 3` is high, `1..=2` is medium, `0` is low.
    pub fn from_yes_count(yes_count: usize) -> Self {
        match yes_count {
            0 => Severity::Low,
            1..=2 => Severity::Medium,
            _ => Severity::High,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Severity::High => "You may benefit from professional support.",
            Severity::Medium => "Monitor your mental health and practice self-care.",
            Severity::Low => "You're doing well. Keep it up!",
        }
    }

    pub fn remedies(&self) -> &'static [&'static str; REMEDY_COUNT] {
        match self {
            Severity::High => &[
                "Talk to a mental health professional",
                "Practice daily self-care",
                "Maintain regular sleep",
                "Connect with supportive people",
                "Consider therapy",
            ],
            Severity::Medium => &[
                "Practice mindfulness",
                "Maintain routine",
                "Exercise regularly",
                "Talk to friends",
                "Monitor your mood",
            ],
            Severity::Low => &[
                "Continue healthy habits",
                "Stay connected",
                "Practice stress relief",
                "Regular check-ins",
                "Help others",
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(format!("Invalid Severity: {}", s)),
        }
    }
}
