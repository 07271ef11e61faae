//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use wellness_domain::OutputFormat;

// Re-export OutputFormat from domain for convenience
pub use wellness_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// How results are printed
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_str = r#"
[output]
format = "yaml"
"#;
        let parsed: Result<super::super::FileConfig, _> = toml::from_str(toml_str);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_defaults_to_colored_text() {
        let config = FileOutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
    }
}
