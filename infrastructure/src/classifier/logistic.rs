//! Multinomial logistic regression over sparse tf-idf features.
//!
//! Trained by full-batch gradient descent on the mean cross-entropy with an
//! L2 penalty of `1 / (C * n)`, starting from zero weights, so training is
//! deterministic for a given dataset.

use super::tfidf::SparseVector;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Training hyperparameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticRegressionParams {
    /// Maximum gradient descent iterations
    pub max_iter: usize,
    /// Step size
    pub learning_rate: f64,
    /// Inverse regularization strength (larger = weaker penalty)
    pub c: f64,
    /// Stop when the largest gradient component falls below this
    pub tolerance: f64,
}

impl Default for LogisticRegressionParams {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            learning_rate: 1.0,
            c: 1.0,
            tolerance: 1e-5,
        }
    }
}

/// A fitted multinomial classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    labels: Vec<String>,
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LogisticRegression {
    /// Fit a model.
    ///
    /// `targets[i]` is the index into `labels` of `samples[i]`. Every sample
    /// index must be below `n_features`.
    pub fn fit(
        samples: &[SparseVector],
        targets: &[usize],
        labels: Vec<String>,
        n_features: usize,
        params: &LogisticRegressionParams,
    ) -> Self {
        debug_assert_eq!(samples.len(), targets.len());

        let k = labels.len();
        let n = samples.len().max(1) as f64;
        let alpha = 1.0 / (params.c * n);

        let mut model = Self {
            labels,
            weights: vec![vec![0.0; n_features]; k],
            intercepts: vec![0.0; k],
        };

        let mut grad_w = vec![vec![0.0; n_features]; k];
        let mut grad_b = vec![0.0; k];

        for iteration in 0..params.max_iter {
            for row in &mut grad_w {
                row.iter_mut().for_each(|g| *g = 0.0);
            }
            grad_b.iter_mut().for_each(|g| *g = 0.0);

            for (x, &y) in samples.iter().zip(targets) {
                let probs = model.probabilities(x);
                for (class, p) in probs.iter().enumerate() {
                    let err = p - if class == y { 1.0 } else { 0.0 };
                    grad_b[class] += err;
                    for &(j, v) in x {
                        grad_w[class][j] += err * v;
                    }
                }
            }

            let mut max_grad: f64 = 0.0;
            for class in 0..k {
                for j in 0..n_features {
                    let g = grad_w[class][j] / n + alpha * model.weights[class][j];
                    model.weights[class][j] -= params.learning_rate * g;
                    max_grad = max_grad.max(g.abs());
                }
                let g = grad_b[class] / n;
                model.intercepts[class] -= params.learning_rate * g;
                max_grad = max_grad.max(g.abs());
            }

            if max_grad < params.tolerance {
                debug!(iterations = iteration + 1, "Logistic regression converged");
                break;
            }
        }

        model
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    fn scores(&self, x: &SparseVector) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(w, b)| b + x.iter().map(|&(j, v)| w[j] * v).sum::<f64>())
            .collect()
    }

    /// Class probabilities (softmax of the linear scores), in label order.
    pub fn probabilities(&self, x: &SparseVector) -> Vec<f64> {
        let scores = self.scores(x);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / total).collect()
    }

    /// Most probable label, or `None` for a model with no classes.
    pub fn predict(&self, x: &SparseVector) -> Option<&str> {
        let scores = self.scores(x);
        let mut best: Option<(usize, f64)> = None;
        for (index, score) in scores.into_iter().enumerate() {
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| self.labels[index].as_str())
    }

    /// True if the weight matrix matches the label list and `n_features`.
    pub(crate) fn is_consistent(&self, n_features: usize) -> bool {
        !self.labels.is_empty()
            && self.weights.len() == self.labels.len()
            && self.intercepts.len() == self.labels.len()
            && self.weights.iter().all(|row| row.len() == n_features)
    }
}
