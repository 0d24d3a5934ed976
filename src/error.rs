//! Error handling for jobtailor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobTailorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Enrichment error: {0}")]
    Enrichment(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, JobTailorError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for JobTailorError {
    fn from(err: anyhow::Error) -> Self {
        JobTailorError::InvalidInput(err.to_string())
    }
}
