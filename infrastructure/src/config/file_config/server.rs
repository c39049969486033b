//! HTTP server configuration from TOML (`[server]` section)

use super::super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Raw server configuration from TOML
///
/// # Example
///
/// ```toml
/// [server]
/// bind = "127.0.0.1:5000"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the HTTP endpoint listens on
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

impl FileServerConfig {
    /// Parse `bind` into a socket address, collecting an issue on failure.
    pub fn parse_bind(&self) -> (Option<SocketAddr>, Vec<ConfigIssue>) {
        match self.bind.parse::<SocketAddr>() {
            Ok(addr) => (Some(addr), vec![]),
            Err(_) => (
                None,
                vec![ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidBindAddress {
                        value: self.bind.clone(),
                    },
                    message: format!(
                        "server.bind: '{}' is not a valid host:port address",
                        self.bind
                    ),
                }],
            ),
        }
    }
}
