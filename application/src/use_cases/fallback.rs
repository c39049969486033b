//! Fallback answerer.
//!
//! Hands a question the tutor could not compute to the external generative
//! model. Always produces text: gateway failures become a readable error
//! string instead of propagating, so the student never sees an HTTP error.

use crate::ports::text_generation::{GenerationRequest, TextGenerationGateway};
use std::sync::Arc;
use tracing::{debug, warn};

/// Instruction sent with every fallback request.
pub const TUTOR_SYSTEM_PROMPT: &str = "You are a math assistant for Class 1–5 students. \
Always answer in one or two short sentences. \
Do not give long explanations. \
Explain in simple words and show steps if possible.";

/// Answer used when the service replied without a text field.
pub const NO_ANSWER_RECEIVED: &str = "No answer received.";

/// Asks the generation gateway to answer a question in tutor voice.
#[derive(Clone)]
pub struct FallbackAnswerer {
    gateway: Arc<dyn TextGenerationGateway>,
    system_prompt: String,
}

impl FallbackAnswerer {
    pub fn new(gateway: Arc<dyn TextGenerationGateway>) -> Self {
        Self {
            gateway,
            system_prompt: TUTOR_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Answer `question` with the external model.
    ///
    /// Never fails. On a gateway error the result is
    /// `"<provider> error: <detail>"`, e.g. `"Ollama error: Request timed out after 30s"`.
    pub async fn answer(&self, question: &str) -> String {
        let request = GenerationRequest::new(question, self.system_prompt.as_str());
        let provider = self.gateway.provider_name();

        debug!(provider, "Sending question to fallback model");

        match self.gateway.generate(&request).await {
            Ok(reply) => reply
                .response
                .unwrap_or_else(|| NO_ANSWER_RECEIVED.to_string()),
            Err(e) => {
                warn!(provider, error = %e, "Fallback generation failed");
                format!("{} error: {}", provider, e)
            }
        }
    }
}
