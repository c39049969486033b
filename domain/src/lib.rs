//! Domain layer for math-tutor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Intent
//!
//! A question is classified into an [`IntentLabel`] such as `addition` or
//! `area_circle`. Each intent has a fixed formula and a minimum number of
//! operands (its arity).
//!
//! ## Dispatch
//!
//! [`dispatch`] turns an intent plus the numbers found in the question into
//! either a computed [`Answer`] or an [`UnhandledReason`]. Unhandled questions
//! are answered by the fallback model instead.

pub mod core;
pub mod intent;

// Re-export commonly used types
pub use core::{answer::Answer, error::DomainError, question::Question};
pub use intent::{
    arithmetic::ArithmeticError,
    dispatch::{
        DIGIT_NOT_FOUND, DIVIDE_BY_ZERO, Dispatch, UnhandledReason, dispatch, dispatch_label,
        dispatch_sequence, resolve_label,
    },
    label::IntentLabel,
    numbers::{NumberSequence, Operand, extract_numbers},
};
