//! Use cases (application services)

pub mod fallback;
pub mod solve_question;
