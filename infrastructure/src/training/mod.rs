//! Training pipeline for the intent classifier.

pub mod dataset;
pub mod error;
pub mod report;
pub mod trainer;

pub use dataset::{
    DEFAULT_SPLIT_SEED, DEFAULT_TEST_FRACTION, DatasetFormat, LabeledQuestion, parse_csv_dataset,
    parse_dataset, read_dataset, train_test_split,
};
pub use error::TrainingError;
pub use report::{ClassificationReport, LabelMetrics};
pub use trainer::{Trainer, TrainerConfig, TrainingOutcome};
