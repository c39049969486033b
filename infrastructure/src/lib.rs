//! Infrastructure layer for math-tutor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading and the
//! offline training pipeline for the intent classifier.

pub mod classifier;
pub mod config;
pub mod ollama;
pub mod training;

// Re-export commonly used types
pub use classifier::{ArtifactError, TrainedClassifier};
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileClassifierConfig, FileConfig,
    FileOllamaConfig, FileServerConfig, Severity,
};
pub use ollama::{OllamaGateway, OllamaSettings};
pub use training::{
    ClassificationReport, LabeledQuestion, Trainer, TrainerConfig, TrainingError,
    TrainingOutcome, read_dataset,
};
