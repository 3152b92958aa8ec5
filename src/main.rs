//! Workfit: self-assessment skill scoring and job matching tool

mod cli;
mod config;
mod error;
mod input;
mod llm;
mod output;
mod scoring;

use clap::Parser;
use cli::{CatalogAction, Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, WorkfitError};
use input::answers::AnswerSet;
use input::catalog::JobCatalog;
use log::{error, info};
use output::formatter::ReportGenerator;
use scoring::engine::EvaluationEngine;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Evaluate {
            answers,
            catalog,
            strategy,
            model,
            output,
            detailed,
            save,
            top,
        } => {
            info!("Starting evaluation");

            // Validate input files
            cli::validate_file_extension(&answers, &["json"])
                .map_err(|e| WorkfitError::InvalidInput(format!("Answers file: {}", e)))?;
            cli::validate_file_extension(&catalog, &["json"])
                .map_err(|e| WorkfitError::InvalidInput(format!("Catalog file: {}", e)))?;

            // Parse output format and CLI overrides
            let output_format =
                cli::parse_output_format(&output).map_err(WorkfitError::InvalidInput)?;
            if let Some(strategy) = &strategy {
                config.analyzer.strategy =
                    cli::parse_strategy(strategy).map_err(WorkfitError::InvalidInput)?;
            }
            if let Some(model) = model {
                config.analyzer.model = model;
            }
            config.output.detailed = detailed || config.output.detailed;
            if let Some(top) = top {
                config.output.top_matches = top;
            }

            // Load and validate inputs
            let answer_set = AnswerSet::load(&answers)?;
            answer_set.validate()?;
            let job_catalog = JobCatalog::load(&catalog)?;
            info!(
                "Loaded {} catalog jobs for respondent '{}'",
                job_catalog.len(),
                answer_set.respondent
            );

            // Run the evaluation
            let engine = EvaluationEngine::from_config(&config)?;
            let report = engine.evaluate(&answer_set, &job_catalog).await;

            // Render
            let generator = ReportGenerator::new(&config.output);
            let rendered = generator.generate(&report, output_format)?;
            println!("{}", rendered);

            if let Some(path) = save {
                generator.save(&report, output_format, &path)?;
                info!("Report saved to {}", path.display());
            }
        }

        Commands::Catalog { action } => match action {
            CatalogAction::Show { catalog } => {
                cli::validate_file_extension(&catalog, &["json"])
                    .map_err(|e| WorkfitError::InvalidInput(format!("Catalog file: {}", e)))?;

                let job_catalog = JobCatalog::load(&catalog)?;
                println!("{} jobs in {}\n", job_catalog.len(), catalog.display());
                for job in &job_catalog.jobs {
                    println!("  {} [{}]", job.name, job.category);
                    if !job.required_scores.is_empty() {
                        let requirements: Vec<String> = job
                            .required_scores
                            .iter()
                            .map(|(skill, score)| format!("{} {:.1}", skill, score))
                            .collect();
                        println!("    Requires: {}", requirements.join(", "));
                    }
                    if let Some(demand) = &job.physical_demand {
                        println!("    Physical demand: {:?}", demand);
                    }
                    if let Some(environment) = &job.environment {
                        println!("    Environment: {}", environment);
                    }
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Analyzer strategy: {:?}", config.analyzer.strategy);
                println!("Classifier endpoint: {}", config.analyzer.endpoint);
                println!("Classifier model: {}", config.analyzer.model);
                println!("API key variable: {}", config.analyzer.api_key_env);
                println!("\nMatching:");
                println!("  Base percent: {:.1}", config.matching.base_percent);
                println!(
                    "  Floor / cap: {:.1} / {:.1}",
                    config.matching.floor_percent, config.matching.cap_percent
                );
                println!(
                    "  Deficit / surplus weight: {:.1} / {:.1}",
                    config.matching.deficit_weight, config.matching.surplus_weight
                );
                println!("  Skill subset: {:?}", config.matching.skill_subset);
            }

            Some(ConfigAction::Reset) => {
                info!("Resetting configuration to defaults");
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset");
            }
        },
    }

    Ok(())
}
