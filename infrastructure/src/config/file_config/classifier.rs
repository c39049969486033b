//! Classifier artifact configuration from TOML (`[classifier]` section)

use super::super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw classifier configuration from TOML
///
/// # Example
///
/// ```toml
/// [classifier]
/// model_path = "math_model.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    /// Trained artifact produced by `math-tutor train`
    pub model_path: PathBuf,
}

impl Default for FileClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("math_model.json"),
        }
    }
}

impl FileClassifierConfig {
    /// Warn when the artifact is missing. The service still runs, but every
    /// question is answered by the fallback model.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.model_path.exists() {
            return vec![];
        }
        vec![ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::MissingArtifact {
                path: self.model_path.clone(),
            },
            message: format!(
                "classifier.model_path: '{}' not found; run `math-tutor train` first",
                self.model_path.display()
            ),
        }]
    }
}
