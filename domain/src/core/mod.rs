//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: the raw question text as submitted
//! - [`answer::Answer`]: the text handed back to the student
//! - [`error::DomainError`]: domain-level errors

pub mod answer;
pub mod error;
pub mod question;
