//! Intent classifier port
//!
//! Defines the interface for turning question text into an intent label.

use thiserror::Error;

/// Errors that can occur while classifying a question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Classifier model not available: {0}")]
    ModelUnavailable(String),

    #[error("Classifier returned no label")]
    EmptyPrediction,

    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}

/// Classifier that maps question text to a single intent label
///
/// The returned label is opaque to the application layer; the dispatcher
/// decides whether it names a known intent. Implementations hold a trained
/// model that is only read after loading, so one instance is shared across
/// all concurrent requests.
pub trait IntentClassifier: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Predict the intent label for `text`
    fn predict(&self, text: &str) -> Result<String, ClassifierError>;
}

/// Classifier used when no trained model could be loaded.
///
/// Every prediction fails, so every question goes to the fallback.
#[derive(Debug, Clone)]
pub struct UnavailableClassifier {
    reason: String,
}

impl UnavailableClassifier {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl IntentClassifier for UnavailableClassifier {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn predict(&self, _text: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::ModelUnavailable(self.reason.clone()))
    }
}
