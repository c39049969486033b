//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and validated as a whole by
//! [`FileConfig::validate`].

mod classifier;
mod ollama;
mod server;

pub use classifier::FileClassifierConfig;
pub use ollama::FileOllamaConfig;
pub use server::FileServerConfig;

use super::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP endpoint settings
    pub server: FileServerConfig,
    /// Fallback generation service settings
    pub ollama: FileOllamaConfig,
    /// Intent classifier artifact settings
    pub classifier: FileClassifierConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.server.parse_bind().1);
        issues.extend(self.ollama.validate());
        issues.extend(self.classifier.validate());
        issues
    }
}
