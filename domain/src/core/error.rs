//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown intent label: {0}")]
    UnknownIntent(String),

    #[error("Empty intent label")]
    EmptyIntent,
}
