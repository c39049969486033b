//! Ollama text generation gateway

use super::protocol::{GenerateRequest, GenerateResponse};
use crate::config::FileOllamaConfig;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use tutor_application::ports::text_generation::{
    GatewayError, GenerationReply, GenerationRequest, TextGenerationGateway,
};

/// Longest error body kept in [`GatewayError::HttpStatus`]
const MAX_ERROR_BODY: usize = 512;

/// Connection settings for [`OllamaGateway`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaSettings {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl From<&FileOllamaConfig> for OllamaSettings {
    fn from(config: &FileOllamaConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl Default for OllamaSettings {
    fn default() -> Self {
        OllamaSettings::from(&FileOllamaConfig::default())
    }
}

/// Text generation gateway backed by a local Ollama server.
///
/// Each call is one POST to `{base_url}/api/generate`, bounded by the
/// configured timeout. Failed calls are never retried.
pub struct OllamaGateway {
    client: reqwest::Client,
    endpoint: String,
    settings: OllamaSettings,
}

impl OllamaGateway {
    pub fn new(settings: OllamaSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = format!("{}/api/generate", settings.base_url.trim_end_matches('/'));

        info!(endpoint = %endpoint, model = %settings.model, "OllamaGateway initialized");

        Ok(Self {
            client,
            endpoint,
            settings,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(self.settings.timeout.as_secs())
        } else if e.is_connect() {
            GatewayError::ConnectionError(e.to_string())
        } else {
            GatewayError::Other(e.to_string())
        }
    }
}

#[async_trait]
impl TextGenerationGateway for OllamaGateway {
    fn provider_name(&self) -> &str {
        "Ollama"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationReply, GatewayError> {
        let body = GenerateRequest {
            model: &self.settings.model,
            prompt: &request.prompt,
            system: &request.system,
            stream: false,
        };

        debug!(endpoint = %self.endpoint, "POST generate");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let mut body = text;
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(GenerationReply {
            response: parsed.response,
        })
    }
}
