//! Application layer for math-tutor
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    intent_classifier::{ClassifierError, IntentClassifier, UnavailableClassifier},
    text_generation::{GatewayError, GenerationReply, GenerationRequest, TextGenerationGateway},
};
pub use use_cases::fallback::{FallbackAnswerer, NO_ANSWER_RECEIVED, TUTOR_SYSTEM_PROMPT};
pub use use_cases::solve_question::{AnswerSource, SolveOutput, SolveQuestionUseCase};
