//! Search term value object

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A disorder name to look up (Value Object)
///
/// Always trimmed and non-empty. Case-insensitivity and fuzzy matching are
/// left to the remote directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    value: String,
}

impl SearchTerm {
    /// Validate and trim a raw term
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(ValidationError::EmptySearchTerm)
        } else {
            Ok(Self {
                value: trimmed.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::str::FromStr for SearchTerm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
