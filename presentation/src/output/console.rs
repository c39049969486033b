//! Console output for answers and training reports

use colored::Colorize;
use serde::Serialize;
use tutor_application::{AnswerSource, SolveOutput};

/// JSON shape of a single answer, matching the HTTP reply
#[derive(Debug, Serialize)]
struct AnswerJson<'a> {
    answer: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

/// Formats tutor output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an answer for a terminal
    pub fn format(output: &SolveOutput, show_source: bool) -> String {
        let mut text = format!("{} {}\n", "A:".green().bold(), output.answer);
        if show_source {
            let source = match &output.source {
                AnswerSource::Computed(_) => output.source.to_string().cyan(),
                AnswerSource::Fallback(_) => output.source.to_string().yellow(),
            };
            text.push_str(&format!("{} {}\n", "Source:".dimmed(), source));
        }
        text
    }

    /// Format as JSON
    pub fn format_json(output: &SolveOutput, show_source: bool) -> String {
        let json = AnswerJson {
            answer: output.answer.as_str(),
            source: show_source.then(|| output.source.to_string()),
        };
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
    }

    /// Section header used by the `train` and `show-config` commands
    pub fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
