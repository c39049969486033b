//! Ollama adapter for the fallback answerer.
//!
//! Implements [`TextGenerationGateway`](tutor_application::TextGenerationGateway)
//! over Ollama's `/api/generate` HTTP endpoint.

mod gateway;
mod protocol;

pub use gateway::{OllamaGateway, OllamaSettings};
