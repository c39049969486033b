//! Intent classifier backed by a tf-idf vectorizer and multinomial
//! logistic regression.

pub mod artifact;
pub mod logistic;
pub mod tfidf;

pub use artifact::{ARTIFACT_VERSION, ArtifactError, TrainedClassifier};
pub use logistic::{LogisticRegression, LogisticRegressionParams};
pub use tfidf::{SparseVector, TfidfVectorizer, tokenize};
