//! Disorder record returned by a successful lookup

use serde::{Deserialize, Serialize};

/// Structured result of a successful disorder-name lookup.
///
/// Retrieved per search and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisorderRecord {
    pub name: String,
    pub description: String,
    /// Treatment options, in display order
    pub remedies: Vec<String>,
}

impl DisorderRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        remedies: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            remedies,
        }
    }
}
