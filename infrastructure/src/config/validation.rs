//! Structured configuration issues reported by [`FileConfig::validate`](super::FileConfig::validate).

use std::path::PathBuf;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required string field is empty.
    EmptyValue { field: String },
    /// A URL field does not start with `http://` or `https://`.
    InvalidUrl { field: String, value: String },
    /// A timeout of zero would make every fallback call fail immediately.
    ZeroTimeout,
    /// The bind address is not `host:port`.
    InvalidBindAddress { value: String },
    /// The classifier artifact does not exist; every question will fall back.
    MissingArtifact { path: PathBuf },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
