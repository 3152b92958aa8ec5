//! CLI interface for workfit

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "workfit")]
#[command(about = "Self-assessment skill scoring and job matching tool")]
#[command(
    long_about = "Score free-text self-assessment answers into a skill profile and rank a job catalog by fit, using a local heuristic or a remote classifier"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an answer set against a job catalog
    Evaluate {
        /// Path to the answers file (JSON)
        #[arg(short, long)]
        answers: PathBuf,

        /// Path to the job catalog file (JSON)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Analyzer strategy: heuristic, remote
        #[arg(short, long)]
        strategy: Option<String>,

        /// Classifier model to use with the remote strategy
        #[arg(short, long)]
        model: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show job descriptions and support notes
        #[arg(short, long)]
        detailed: bool,

        /// Save the rendered report to a file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Limit how many ranked jobs are shown
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Catalog inspection commands
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Load a catalog and list its jobs
    Show {
        /// Path to the job catalog file (JSON)
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Parse and validate analyzer strategy
pub fn parse_strategy(strategy: &str) -> Result<crate::config::Strategy, String> {
    match strategy.to_lowercase().as_str() {
        "heuristic" | "local" => Ok(crate::config::Strategy::Heuristic),
        "remote" | "llm" => Ok(crate::config::Strategy::Remote),
        _ => Err(format!(
            "Invalid strategy: {}. Supported: heuristic, remote",
            strategy
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
