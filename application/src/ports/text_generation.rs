//! Text generation gateway port
//!
//! Defines the interface for asking an external generative model to answer
//! a question the tutor cannot compute itself.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during text generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A single non-streaming generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The student's question, passed through verbatim
    pub prompt: String,
    /// Fixed instruction describing how the model should answer
    pub system: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: system.into(),
        }
    }
}

/// Reply from the generation service.
///
/// `response` is `None` when the service answered successfully but the
/// payload carried no text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReply {
    pub response: Option<String>,
}

/// Gateway for external text generation
///
/// This port defines how the application layer talks to a generative model.
/// Implementations (adapters) live in the infrastructure layer. A call is a
/// single attempt: implementations bound it with a timeout and do not retry.
#[async_trait]
pub trait TextGenerationGateway: Send + Sync {
    /// Human-readable provider name, used to prefix error answers
    fn provider_name(&self) -> &str;

    /// Generate a reply for the request
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationReply, GatewayError>;
}
