//! Ollama `/api/generate` wire types

use serde::{Deserialize, Serialize};

/// Request body for a single non-streaming generation
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub system: &'a str,
    pub stream: bool,
}

/// Response body; only the generated text is read
#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
}
