//! Solve Question use case.
//!
//! Orchestrates one question/answer exchange:
//! 1. Classify the question (a classifier failure counts as "no label")
//! 2. Extract the numbers from the text
//! 3. Dispatch the label against the numbers
//! 4. If the dispatcher declines, ask the [`FallbackAnswerer`]

use crate::ports::intent_classifier::IntentClassifier;
use crate::ports::text_generation::TextGenerationGateway;
use crate::use_cases::fallback::FallbackAnswerer;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tutor_domain::{
    Answer, IntentLabel, Question, UnhandledReason, dispatch_sequence, extract_numbers,
    resolve_label,
};

/// Where an answer came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    /// Computed locally for this intent
    Computed(IntentLabel),
    /// Produced by the fallback model because the dispatcher declined
    Fallback(UnhandledReason),
}

impl AnswerSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, AnswerSource::Fallback(_))
    }
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerSource::Computed(intent) => write!(f, "computed ({})", intent),
            AnswerSource::Fallback(reason) => write!(f, "fallback ({})", reason),
        }
    }
}

/// Output of the [`SolveQuestionUseCase`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutput {
    pub answer: Answer,
    pub source: AnswerSource,
}

/// Use case for answering a single question.
///
/// Stateless apart from the injected ports, so one instance serves any
/// number of concurrent requests.
#[derive(Clone)]
pub struct SolveQuestionUseCase {
    classifier: Arc<dyn IntentClassifier>,
    fallback: FallbackAnswerer,
}

impl SolveQuestionUseCase {
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        gateway: Arc<dyn TextGenerationGateway>,
    ) -> Self {
        Self {
            classifier,
            fallback: FallbackAnswerer::new(gateway),
        }
    }

    /// Answer `question`. Never fails.
    pub async fn execute(&self, question: &Question) -> SolveOutput {
        let label = match self.classifier.predict(question.content()) {
            Ok(label) => Some(label),
            Err(e) => {
                warn!(classifier = self.classifier.name(), error = %e, "Classification failed");
                None
            }
        };
        let numbers = extract_numbers(question.content());

        debug!(
            label = label.as_deref().unwrap_or("<none>"),
            numbers = ?numbers.as_slice(),
            "Classified question"
        );

        let intent = match resolve_label(label.as_deref()) {
            Ok(intent) => intent,
            Err(reason) => return self.fall_back(question, reason).await,
        };

        match dispatch_sequence(intent, &numbers).into_result() {
            Ok(answer) => {
                info!(%intent, "Answered locally");
                SolveOutput {
                    answer,
                    source: AnswerSource::Computed(intent),
                }
            }
            Err(reason) => self.fall_back(question, reason).await,
        }
    }

    async fn fall_back(&self, question: &Question, reason: UnhandledReason) -> SolveOutput {
        info!(%reason, "Falling back to generative model");
        let text = self.fallback.answer(question.content()).await;
        SolveOutput {
            answer: Answer::new(text),
            source: AnswerSource::Fallback(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::intent_classifier::{ClassifierError, UnavailableClassifier};
    use crate::ports::text_generation::{GatewayError, GenerationReply, GenerationRequest};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct FixedClassifier(&'static str);

    impl IntentClassifier for FixedClassifier {
        fn name(&self) -> &str {
            "fixed"
        }

        fn predict(&self, _text: &str) -> Result<String, ClassifierError> {
            Ok(self.0.to_string())
        }
    }

    struct RecordingGateway {
        reply: Result<GenerationReply, GatewayError>,
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingGateway {
        fn answering(text: &str) -> Self {
            Self {
                reply: Ok(GenerationReply {
                    response: Some(text.to_string()),
                }),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: GatewayError) -> Self {
            Self {
                reply: Err(error),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerationGateway for RecordingGateway {
        fn provider_name(&self) -> &str {
            "Ollama"
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationReply, GatewayError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            self.reply.clone()
        }
    }

    fn use_case(
        classifier: impl IntentClassifier + 'static,
        gateway: Arc<RecordingGateway>,
    ) -> SolveQuestionUseCase {
        SolveQuestionUseCase::new(Arc::new(classifier), gateway)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_computed_answer_skips_fallback() {
        let gateway = Arc::new(RecordingGateway::answering("unused"));
        let uc = use_case(FixedClassifier("addition"), gateway.clone());

        let output = uc.execute(&Question::new("add 3, 4 and 5")).await;

        assert_eq!(output.answer, "12");
        assert_eq!(output.source, AnswerSource::Computed(IntentLabel::Addition));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_label_falls_back() {
        let gateway = Arc::new(RecordingGateway::answering("A fraction is a part of a whole."));
        let uc = use_case(FixedClassifier("fractions"), gateway.clone());

        let output = uc.execute(&Question::new("what is 1 of 2 parts?")).await;

        assert_eq!(output.answer, "A fraction is a part of a whole.");
        assert_eq!(
            output.source,
            AnswerSource::Fallback(UnhandledReason::UnknownLabel("fractions".to_string()))
        );
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_insufficient_operands_falls_back() {
        let gateway = Arc::new(RecordingGateway::answering("Please give two numbers."));
        let uc = use_case(FixedClassifier("addition"), gateway.clone());

        let output = uc.execute(&Question::new("add 5 to something")).await;

        assert!(output.source.is_fallback());
        assert_eq!(output.answer, "Please give two numbers.");
        assert_eq!(gateway.prompts.lock().unwrap()[0], "add 5 to something");
    }

    #[tokio::test]
    async fn test_classifier_failure_falls_back() {
        let gateway = Arc::new(RecordingGateway::answering("Seven."));
        let uc = use_case(UnavailableClassifier::new("no model"), gateway.clone());

        let output = uc.execute(&Question::new("what is 3 + 4")).await;

        assert_eq!(output.answer, "Seven.");
        assert_eq!(output.source, AnswerSource::Fallback(UnhandledReason::NoLabel));
    }

    #[tokio::test]
    async fn test_arithmetic_failure_falls_back() {
        let gateway = Arc::new(RecordingGateway::answering("That number is too big."));
        let uc = use_case(FixedClassifier("factorial"), gateway.clone());

        let output = uc.execute(&Question::new("factorial of 50")).await;

        assert!(output.source.is_fallback());
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_defined_edge_case_does_not_fall_back() {
        let gateway = Arc::new(RecordingGateway::answering("unused"));
        let uc = use_case(FixedClassifier("division"), gateway.clone());

        let output = uc.execute(&Question::new("divide 7 by 0")).await;

        assert_eq!(output.answer, "Cannot divide by zero.");
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_gateway_failure_still_answers() {
        let gateway = Arc::new(RecordingGateway::failing(GatewayError::ConnectionError(
            "connection refused".to_string(),
        )));
        let uc = use_case(FixedClassifier("unknown"), gateway);

        let output = uc.execute(&Question::new("why is the sky blue?")).await;

        assert!(output.answer.as_str().starts_with("Ollama error:"));
    }

    #[tokio::test]
    async fn test_empty_question_falls_back() {
        let gateway = Arc::new(RecordingGateway::answering("Please ask a question."));
        let uc = use_case(FixedClassifier("square"), gateway.clone());

        let output = uc.execute(&Question::default()).await;

        assert_eq!(output.answer, "Please ask a question.");
        assert_eq!(gateway.calls(), 1);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(
            AnswerSource::Computed(IntentLabel::Table).to_string(),
            "computed (table)"
        );
        assert_eq!(
            AnswerSource::Fallback(UnhandledReason::NoLabel).to_string(),
            "fallback (no intent label)"
        );
    }
}
