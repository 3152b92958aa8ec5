//! Error handling for the workfit application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkfitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, WorkfitError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for WorkfitError {
    fn from(err: anyhow::Error) -> Self {
        WorkfitError::AnalysisFailed(err.to_string())
    }
}
