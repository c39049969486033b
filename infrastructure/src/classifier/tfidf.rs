//! TF-IDF text vectorizer.
//!
//! Tokens are lowercased runs of two or more word characters
//! (letters, digits, `_`). Inverse document frequency is smoothed as
//! `ln((1 + n) / (1 + df)) + 1` and each document vector is L2-normalized.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Sparse feature vector: `(feature index, weight)` pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// Split text into lowercase word tokens of at least two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| s.chars().count() >= 2)
        .map(|s| s.to_lowercase())
        .collect()
}

/// Vocabulary and idf weights learned from a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and idf weights from `documents`.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<BTreeSet<String>> = documents
            .iter()
            .map(|d| tokenize(d.as_ref()).into_iter().collect())
            .collect();

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for terms in &tokenized {
            for term in terms {
                *document_frequency.entry(term.clone()).or_default() += 1;
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Self { vocabulary, idf }
    }

    /// Number of features (vocabulary size).
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// Convert `text` into an L2-normalized tf-idf vector.
    ///
    /// Tokens outside the vocabulary are ignored; text with no known tokens
    /// yields an empty vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_default() += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        vector.sort_by_key(|&(index, _)| index);

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > f64::EPSILON {
            for (_, w) in &mut vector {
                *w /= norm;
            }
        }
        vector
    }

    /// True if every vocabulary index is in range of the idf table.
    pub(crate) fn is_consistent(&self) -> bool {
        self.vocabulary.len() == self.idf.len()
            && self.vocabulary.values().all(|&index| index < self.idf.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("What is 12 + 7? Add them!"),
            vec!["what", "is", "12", "add", "them"]
        );
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        assert_eq!(tokenize("a 5 x y area"), vec!["area"]);
    }

    #[test]
    fn test_fit_builds_sorted_vocabulary() {
        let v = TfidfVectorizer::fit(&["add two numbers", "subtract two numbers"]);
        assert_eq!(v.len(), 4);
        let terms: Vec<_> = v.vocabulary.keys().cloned().collect();
        assert_eq!(terms, vec!["add", "numbers", "subtract", "two"]);
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        let v = TfidfVectorizer::fit(&["add two numbers", "subtract two numbers"]);
        let add = v.idf[v.vocabulary["add"]];
        let two = v.idf[v.vocabulary["two"]];
        assert!(add > two);
        // Term present in every document gets the minimum weight of 1.0
        assert!((two - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_normalized() {
        let v = TfidfVectorizer::fit(&["add two numbers", "subtract two numbers"]);
        let x = v.transform("add add numbers");
        let norm: f64 = x.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        assert!(x.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_unknown_tokens_yield_empty_vector() {
        let v = TfidfVectorizer::fit(&["add two numbers"]);
        assert!(v.transform("completely unrelated").is_empty());
        assert!(v.transform("").is_empty());
    }
}
