use crate::classifier::ArtifactError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing data or training the classifier
#[derive(Error, Debug)]
pub enum TrainingError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read dataset: {0}")]
    Read(#[source] std::io::Error),

    #[error("Malformed dataset line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed CSV dataset at line {line}: {source}")]
    MalformedCsv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset contains no samples")]
    EmptyDataset,

    #[error("Dataset needs at least 2 distinct labels, found {0}")]
    TooFewClasses(usize),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}
