//! Fallback model configuration from TOML (`[ollama]` section)

use super::super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Raw Ollama configuration from TOML
///
/// # Example
///
/// ```toml
/// [ollama]
/// base_url = "http://localhost:11434"
/// model = "mistral:latest"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Base URL of the Ollama server; `/api/generate` is appended
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Upper bound on a single generation call
    pub timeout_secs: u64,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "mistral:latest".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileOllamaConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidUrl {
                    field: "ollama.base_url".to_string(),
                    value: self.base_url.clone(),
                },
                message: format!(
                    "ollama.base_url: '{}' must start with http:// or https://",
                    self.base_url
                ),
            });
        }

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "ollama.model".to_string(),
                },
                message: "ollama.model: model name cannot be empty".to_string(),
            });
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroTimeout,
                message: "ollama.timeout_secs: must be greater than zero".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FileOllamaConfig::default().validate().is_empty());
    }

    #[test]
    fn test_collects_every_issue() {
        let config = FileOllamaConfig {
            base_url: "localhost:11434".to_string(),
            model: " ".to_string(),
            timeout_secs: 0,
        };
        let codes: Vec<_> = config.validate().into_iter().map(|i| i.code).collect();
        assert_eq!(codes.len(), 3);
        assert!(codes.contains(&ConfigIssueCode::ZeroTimeout));
        assert!(codes.contains(&ConfigIssueCode::EmptyValue {
            field: "ollama.model".to_string()
        }));
    }
}
