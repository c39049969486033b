//! Configuration file loading for math-tutor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MATH_TUTOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./math-tutor.toml` or `./.math-tutor.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/math-tutor/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{FileClassifierConfig, FileConfig, FileOllamaConfig, FileServerConfig};
pub use loader::{ConfigLoader, ENV_PREFIX};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
