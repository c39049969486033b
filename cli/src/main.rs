//! CLI entrypoint for math-tutor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tutor_application::{IntentClassifier, SolveQuestionUseCase, UnavailableClassifier};
use tutor_domain::Question;
use tutor_infrastructure::{
    ConfigLoader, FileConfig, OllamaGateway, OllamaSettings, TrainedClassifier, Trainer,
    read_dataset,
};
use tutor_presentation::{AppState, Cli, Command, ConsoleFormatter, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when no -v is given
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting math-tutor");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    match cli.command {
        Command::ShowConfig => show_config(cli.config.as_deref(), cli.no_config, &config),
        Command::Train { dataset, out } => {
            let out = out.unwrap_or_else(|| config.classifier.model_path.clone());
            train(&dataset, &out)
        }
        Command::Ask {
            question,
            output,
            show_source,
        } => {
            check_config(&config)?;
            let solver = build_solver(&config)?;
            let result = solver.execute(&Question::new(question)).await;
            let text = match output {
                OutputFormat::Text => ConsoleFormatter::format(&result, show_source),
                OutputFormat::Json => ConsoleFormatter::format_json(&result, show_source),
            };
            println!("{}", text.trim_end());
            Ok(())
        }
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            check_config(&config)?;
            let solver = build_solver(&config)?;

            let listener = TcpListener::bind(&config.server.bind)
                .await
                .with_context(|| format!("Failed to bind {}", config.server.bind))?;
            println!(
                "{} http://{}",
                "Serving on".green().bold(),
                listener.local_addr()?
            );
            tutor_presentation::serve(listener, AppState::new(solver)).await?;
            Ok(())
        }
    }
}

/// Log warnings and fail on errors reported by config validation.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }

    let errors: Vec<&str> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

/// Build the solve use case with its gateway and classifier adapters.
fn build_solver(config: &FileConfig) -> Result<SolveQuestionUseCase> {
    let gateway = OllamaGateway::new(OllamaSettings::from(&config.ollama))
        .context("Failed to create Ollama client")?;

    let model_path = &config.classifier.model_path;
    let classifier: Arc<dyn IntentClassifier> = match TrainedClassifier::load(model_path) {
        Ok(classifier) => {
            info!(
                path = %model_path.display(),
                labels = classifier.labels().len(),
                "Loaded intent classifier"
            );
            Arc::new(classifier)
        }
        Err(e) => {
            warn!(
                path = %model_path.display(),
                error = %e,
                "Intent classifier unavailable; every question will use the fallback model"
            );
            Arc::new(UnavailableClassifier::new(e.to_string()))
        }
    };

    Ok(SolveQuestionUseCase::new(classifier, Arc::new(gateway)))
}

fn train(dataset: &Path, out: &Path) -> Result<()> {
    let samples = read_dataset(dataset)?;
    let outcome = Trainer::default().train(&samples)?;
    outcome.classifier.save(out)?;

    println!("{}", ConsoleFormatter::header("Classification Report"));
    println!(
        "Trained on {} questions, evaluated on {}\n",
        outcome.train_size, outcome.test_size
    );
    println!("{}", outcome.report.render());
    println!("{} {}", "Model saved to".green().bold(), out.display());
    Ok(())
}

fn show_config(explicit: Option<&Path>, no_config: bool, config: &FileConfig) -> Result<()> {
    println!("{}", ConsoleFormatter::header("Configuration"));
    if no_config {
        println!("Configuration files disabled (--no-config); using defaults.");
    } else {
        for line in ConfigLoader::describe_sources(explicit) {
            println!("{}", line);
        }
    }
    println!();
    println!("{}", toml::to_string_pretty(config)?);

    for issue in config.validate() {
        let label = if issue.is_error() {
            "error:".red().bold()
        } else {
            "warning:".yellow().bold()
        };
        println!("{} {}", label, issue.message);
    }
    Ok(())
}
