//! Answer value object

use serde::{Deserialize, Serialize};

/// The text returned to the student.
///
/// May be an integer, a decimal, a multi-line multiplication table,
/// a qualitative word ("Even", "Prime", ...) or a sentence produced by
/// the fallback model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer(String);

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer(s.to_string())
    }
}

impl PartialEq<&str> for Answer {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
