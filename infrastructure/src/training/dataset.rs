//! Labeled question datasets.
//!
//! Two formats are read, chosen by file extension:
//! - `.csv`: a header row with `question` and `label` columns (others ignored)
//! - anything else: JSON Lines, one `{"question": ..., "label": ...}` object
//!   per line, blank lines ignored

use super::error::TrainingError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Seed used for the train/test shuffle
pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// Fraction of samples held out for evaluation
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// One training example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledQuestion {
    pub question: String,
    pub label: String,
}

impl LabeledQuestion {
    pub fn new(question: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            label: label.into(),
        }
    }
}

/// On-disk dataset encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    JsonLines,
    Csv,
}

impl DatasetFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => DatasetFormat::Csv,
            _ => DatasetFormat::JsonLines,
        }
    }
}

/// Read a dataset from disk in the format implied by its extension.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Vec<LabeledQuestion>, TrainingError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TrainingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match DatasetFormat::from_path(path) {
        DatasetFormat::JsonLines => parse_dataset(BufReader::new(file)),
        DatasetFormat::Csv => parse_csv_dataset(file),
    }
}

/// Parse a CSV table with `question` and `label` header columns.
pub fn parse_csv_dataset(reader: impl Read) -> Result<Vec<LabeledQuestion>, TrainingError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    reader
        .deserialize()
        .map(|record| {
            record.map_err(|source| TrainingError::MalformedCsv {
                line: source.position().map_or(0, |p| p.line()),
                source,
            })
        })
        .collect()
}

/// Parse JSON Lines from any reader. Line numbers in errors are 1-based.
pub fn parse_dataset(reader: impl BufRead) -> Result<Vec<LabeledQuestion>, TrainingError> {
    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(TrainingError::Read)?;
        if line.trim().is_empty() {
            continue;
        }
        let sample = serde_json::from_str(&line).map_err(|source| TrainingError::Malformed {
            line: index + 1,
            source,
        })?;
        samples.push(sample);
    }
    Ok(samples)
}

/// Shuffle with a fixed seed and split off `ceil(len * test_fraction)` samples
/// for testing. At least one sample always stays in the training split.
pub fn train_test_split<T: Clone>(samples: &[T], test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut shuffled = samples.to_vec();
    shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

    let wanted = (shuffled.len() as f64 * test_fraction).ceil() as usize;
    let test_len = wanted.min(shuffled.len().saturating_sub(1));
    let test = shuffled.split_off(shuffled.len() - test_len);
    (shuffled, test)
}
