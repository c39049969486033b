//! Per-label evaluation metrics.

use std::collections::BTreeSet;
use std::fmt::Write;

/// Precision, recall and f1 for one label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of test samples whose true label is this one
    pub support: usize,
}

/// Evaluation of a classifier on a held-out split
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub labels: Vec<LabelMetrics>,
    pub accuracy: f64,
    pub macro_avg: LabelMetrics,
    pub weighted_avg: LabelMetrics,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn f1(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

impl ClassificationReport {
    /// Compare `predicted` against `actual` (same length, same order).
    ///
    /// Labels are the union of both sides, sorted. A label that is never
    /// predicted has precision 0.
    pub fn compute<A: AsRef<str>, P: AsRef<str>>(actual: &[A], predicted: &[P]) -> Self {
        debug_assert_eq!(actual.len(), predicted.len());

        let names: BTreeSet<&str> = actual
            .iter()
            .map(AsRef::as_ref)
            .chain(predicted.iter().map(AsRef::as_ref))
            .collect();
        let pairs: Vec<(&str, &str)> = actual
            .iter()
            .map(AsRef::as_ref)
            .zip(predicted.iter().map(AsRef::as_ref))
            .collect();

        let labels: Vec<LabelMetrics> = names
            .into_iter()
            .map(|name| {
                let true_positive = pairs.iter().filter(|(a, p)| *a == name && *p == name).count();
                let predicted_count = pairs.iter().filter(|(_, p)| *p == name).count();
                let support = pairs.iter().filter(|(a, _)| *a == name).count();
                let precision = ratio(true_positive, predicted_count);
                let recall = ratio(true_positive, support);
                LabelMetrics {
                    label: name.to_string(),
                    precision,
                    recall,
                    f1: f1(precision, recall),
                    support,
                }
            })
            .collect();

        let total = pairs.len();
        let correct = pairs.iter().filter(|(a, p)| a == p).count();

        let count = labels.len().max(1) as f64;
        let macro_avg = LabelMetrics {
            label: "macro avg".to_string(),
            precision: labels.iter().map(|m| m.precision).sum::<f64>() / count,
            recall: labels.iter().map(|m| m.recall).sum::<f64>() / count,
            f1: labels.iter().map(|m| m.f1).sum::<f64>() / count,
            support: total,
        };

        let weight = |m: &LabelMetrics| ratio(m.support, total);
        let weighted_avg = LabelMetrics {
            label: "weighted avg".to_string(),
            precision: labels.iter().map(|m| m.precision * weight(m)).sum(),
            recall: labels.iter().map(|m| m.recall * weight(m)).sum(),
            f1: labels.iter().map(|m| m.f1 * weight(m)).sum(),
            support: total,
        };

        Self {
            labels,
            accuracy: ratio(correct, total),
            macro_avg,
            weighted_avg,
        }
    }

    /// Metrics for `label`, if it appeared in the evaluation
    pub fn label(&self, label: &str) -> Option<&LabelMetrics> {
        self.labels.iter().find(|m| m.label == label)
    }

    /// Render as a fixed-width text table.
    pub fn render(&self) -> String {
        let width = self
            .labels
            .iter()
            .map(|m| m.label.len())
            .chain(["weighted avg".len()])
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>width$}  {:>9}  {:>9}  {:>9}  {:>9}",
            "", "precision", "recall", "f1-score", "support"
        );
        let _ = writeln!(out);
        for m in &self.labels {
            let _ = writeln!(out, "{}", row(m, width));
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:>width$}  {:>9}  {:>9}  {:>9.2}  {:>9}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        );
        let _ = writeln!(out, "{}", row(&self.macro_avg, width));
        let _ = writeln!(out, "{}", row(&self.weighted_avg, width));
        out
    }
}

fn row(m: &LabelMetrics, width: usize) -> String {
    format!(
        "{:>width$}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9}",
        m.label, m.precision, m.recall, m.f1, m.support
    )
}
