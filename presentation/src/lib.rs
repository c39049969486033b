//! Presentation layer for math-tutor
//!
//! This crate contains CLI definitions, the HTTP surface
//! and console output formatting.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use http::{AppState, router, serve};
pub use output::console::ConsoleFormatter;
