//! Intent subdomain: from a classified question to a computed answer.
//!
//! - [`label::IntentLabel`]: the closed set of arithmetic intents and their arities
//! - [`numbers::extract_numbers`]: ordered operands pulled from the question text
//! - [`dispatch::dispatch`]: per-intent computation, or a reason to fall back

pub mod arithmetic;
pub mod dispatch;
pub mod label;
pub mod numbers;
