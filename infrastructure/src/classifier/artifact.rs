//! Trained classifier artifact.
//!
//! A [`TrainedClassifier`] bundles the fitted vectorizer and model and is
//! persisted as a single JSON document. It is only read after loading, so
//! one instance is shared by every request.

use super::logistic::LogisticRegression;
use super::tfidf::TfidfVectorizer;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use tutor_application::{ClassifierError, IntentClassifier};

/// Current artifact format version
pub const ARTIFACT_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed classifier artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported artifact version {found} (expected {ARTIFACT_VERSION})")]
    UnsupportedVersion { found: u32 },

    #[error("Inconsistent classifier artifact: {0}")]
    Inconsistent(String),
}

/// Fitted tf-idf vectorizer plus logistic regression model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedClassifier {
    format_version: u32,
    vectorizer: TfidfVectorizer,
    model: LogisticRegression,
}

impl TrainedClassifier {
    pub fn new(vectorizer: TfidfVectorizer, model: LogisticRegression) -> Self {
        Self {
            format_version: ARTIFACT_VERSION,
            vectorizer,
            model,
        }
    }

    /// Load an artifact written by [`TrainedClassifier::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let classifier: Self = serde_json::from_reader(BufReader::new(file))?;
        classifier.check()?;

        debug!(
            path = %path.display(),
            labels = classifier.labels().len(),
            features = classifier.vectorizer.len(),
            "Loaded classifier artifact"
        );
        Ok(classifier)
    }

    /// Write the artifact, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush().map_err(io_error)?;
        Ok(())
    }

    /// Labels the model can predict, in training order
    pub fn labels(&self) -> &[String] {
        self.model.labels()
    }

    /// Predict a label for `text`.
    pub fn classify(&self, text: &str) -> Option<&str> {
        self.model.predict(&self.vectorizer.transform(text))
    }

    fn check(&self) -> Result<(), ArtifactError> {
        if self.format_version != ARTIFACT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: self.format_version,
            });
        }
        if !self.vectorizer.is_consistent() {
            return Err(ArtifactError::Inconsistent(
                "vocabulary does not match idf table".to_string(),
            ));
        }
        if !self.model.is_consistent(self.vectorizer.len()) {
            return Err(ArtifactError::Inconsistent(format!(
                "model weights do not match {} features",
                self.vectorizer.len()
            )));
        }
        Ok(())
    }
}

impl IntentClassifier for TrainedClassifier {
    fn name(&self) -> &str {
        "tfidf-logreg"
    }

    fn predict(&self, text: &str) -> Result<String, ClassifierError> {
        self.classify(text)
            .map(str::to_string)
            .ok_or(ClassifierError::EmptyPrediction)
    }
}
