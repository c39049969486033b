//! Classifier training.

use super::dataset::{DEFAULT_SPLIT_SEED, DEFAULT_TEST_FRACTION, LabeledQuestion, train_test_split};
use super::error::TrainingError;
use super::report::ClassificationReport;
use crate::classifier::{LogisticRegression, LogisticRegressionParams, TfidfVectorizer, TrainedClassifier};
use std::collections::BTreeSet;
use tracing::{info, warn};
use tutor_domain::IntentLabel;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    pub test_fraction: f64,
    pub seed: u64,
    pub params: LogisticRegressionParams,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            test_fraction: DEFAULT_TEST_FRACTION,
            seed: DEFAULT_SPLIT_SEED,
            params: LogisticRegressionParams::default(),
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub classifier: TrainedClassifier,
    pub report: ClassificationReport,
    pub train_size: usize,
    pub test_size: usize,
}

/// Fits a [`TrainedClassifier`] on a labeled dataset and evaluates it on a
/// held-out split.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    pub fn train(&self, samples: &[LabeledQuestion]) -> Result<TrainingOutcome, TrainingError> {
        if samples.is_empty() {
            return Err(TrainingError::EmptyDataset);
        }

        let labels: Vec<String> = samples
            .iter()
            .map(|s| s.label.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if labels.len() < 2 {
            return Err(TrainingError::TooFewClasses(labels.len()));
        }
        for label in &labels {
            if label.parse::<IntentLabel>().is_err() {
                warn!(label = %label, "Label is not a known intent; it will always fall back");
            }
        }

        let (train, test) = train_test_split(samples, self.config.test_fraction, self.config.seed);
        info!(
            samples = samples.len(),
            train = train.len(),
            test = test.len(),
            labels = labels.len(),
            "Training classifier"
        );

        let questions: Vec<&str> = train.iter().map(|s| s.question.as_str()).collect();
        let vectorizer = TfidfVectorizer::fit(&questions);
        let features: Vec<_> = questions.iter().map(|q| vectorizer.transform(q)).collect();
        let targets: Vec<usize> = train
            .iter()
            .map(|s| labels.binary_search(&s.label).unwrap_or_default())
            .collect();

        let model = LogisticRegression::fit(
            &features,
            &targets,
            labels,
            vectorizer.len(),
            &self.config.params,
        );
        let classifier = TrainedClassifier::new(vectorizer, model);

        let actual: Vec<&str> = test.iter().map(|s| s.label.as_str()).collect();
        let predicted: Vec<&str> = test
            .iter()
            .map(|s| classifier.classify(&s.question).unwrap_or_default())
            .collect();
        let report = ClassificationReport::compute(&actual, &predicted);

        info!(accuracy = report.accuracy, "Training finished");

        Ok(TrainingOutcome {
            classifier,
            report,
            train_size: train.len(),
            test_size: test.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_application::IntentClassifier;

    fn synthetic_dataset() -> Vec<LabeledQuestion> {
        let templates: [(&str, &[&str]); 4] = [
            (
                "addition",
                &["add {a} and {b}", "what is the sum of {a} and {b}", "{a} plus {b}"],
            ),
            (
                "subtraction",
                &["subtract {b} from {a}", "what is {a} minus {b}", "take away {b} from {a}"],
            ),
            (
                "square",
                &["square of {a}", "what is {a} squared", "find the square of {a}"],
            ),
            (
                "table",
                &["multiplication table of {a}", "show the table of {a}", "write the {a} times table"],
            ),
        ];

        let mut samples = Vec::new();
        for (label, patterns) in templates {
            for pattern in patterns {
                for a in 2..8 {
                    let question = pattern
                        .replace("{a}", &a.to_string())
                        .replace("{b}", &(a + 3).to_string());
                    samples.push(LabeledQuestion::new(question, label));
                }
            }
        }
        samples
    }

    #[test]
    fn test_trains_separable_dataset() {
        let samples = synthetic_dataset();
        let outcome = Trainer::default().train(&samples).unwrap();

        assert_eq!(outcome.train_size + outcome.test_size, samples.len());
        assert_eq!(outcome.test_size, (samples.len() as f64 * 0.2).ceil() as usize);
        assert!(outcome.report.accuracy >= 0.9, "{}", outcome.report.render());

        let classifier = &outcome.classifier;
        assert_eq!(classifier.predict("add 40 and 2").unwrap(), "addition");
        assert_eq!(classifier.predict("what is 90 minus 12").unwrap(), "subtraction");
        assert_eq!(classifier.predict("square of 11").unwrap(), "square");
        assert_eq!(classifier.predict("table of 9").unwrap(), "table");
    }

    #[test]
    fn test_trained_artifact_reloads_with_same_predictions() {
        let outcome = Trainer::default().train(&synthetic_dataset()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("math_model.json");

        outcome.classifier.save(&path).unwrap();
        let loaded = TrainedClassifier::load(&path).unwrap();

        for question in ["add 1 and 1", "take away 3 from 10", "what is 6 squared"] {
            assert_eq!(
                loaded.predict(question).unwrap(),
                outcome.classifier.predict(question).unwrap()
            );
        }
    }

    #[test]
    fn test_rejects_empty_dataset() {
        assert!(matches!(
            Trainer::default().train(&[]),
            Err(TrainingError::EmptyDataset)
        ));
    }

    #[test]
    fn test_rejects_single_class() {
        let samples = vec![
            LabeledQuestion::new("add 1 and 2", "addition"),
            LabeledQuestion::new("add 3 and 4", "addition"),
        ];
        assert!(matches!(
            Trainer::default().train(&samples),
            Err(TrainingError::TooFewClasses(1))
        ));
    }

    #[test]
    fn test_accepts_labels_outside_intent_set() {
        let mut samples = synthetic_dataset();
        samples.push(LabeledQuestion::new("what is a fraction", "fractions"));
        samples.push(LabeledQuestion::new("explain fractions to me", "fractions"));

        let outcome = Trainer::default().train(&samples).unwrap();
        assert!(outcome.classifier.labels().contains(&"fractions".to_string()));
    }
}
