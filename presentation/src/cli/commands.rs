//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored text for a terminal
    Text,
    /// JSON object, same shape as the HTTP reply
    Json,
}

/// CLI arguments for math-tutor
#[derive(Parser, Debug)]
#[command(name = "math-tutor")]
#[command(author, version, about = "Elementary math tutor - answers arithmetic questions for Class 1-5")]
#[command(long_about = r#"
math-tutor answers short math questions written in plain English.

Each question is classified into an intent (addition, lcm, area_circle, ...)
and computed exactly from the numbers it contains. Questions that cannot be
computed are handed to a local Ollama model instead.

Configuration files are loaded from (in priority order):
1. MATH_TUTOR_* environment variables, e.g. MATH_TUTOR_OLLAMA__MODEL
2. --config <path>            Explicit config file
3. ./math-tutor.toml          Project-level config
4. ~/.config/math-tutor/config.toml   Global config

Example:
  math-tutor serve
  math-tutor ask "What is the LCM of 4 and 6?"
  math-tutor train --dataset questions.jsonl --out math_model.json
  math-tutor train --dataset math_dataset.csv
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Address to listen on (overrides [server] bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Answer one question and exit
    Ask {
        /// The question, e.g. "add 12 and 30"
        question: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,

        /// Also print whether the answer was computed or generated
        #[arg(long)]
        show_source: bool,
    },

    /// Train the intent classifier from a CSV or JSON Lines dataset
    Train {
        /// `.csv` with question,label columns, or JSON Lines {"question", "label"} objects
        #[arg(long, value_name = "PATH")]
        dataset: PathBuf,

        /// Where to write the model (defaults to [classifier] model_path)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Show configuration file locations and effective values
    ShowConfig,
}
