//! Job posting input

use crate::error::{JobTailorError, Result};
use crate::input::file_detector::PostingFormat;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::path::Path;

pub struct InputManager;

impl InputManager {
    /// Read a job posting file as trimmed text.
    pub async fn read_job_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(JobTailorError::InvalidInput(format!(
                "Job posting file does not exist: {}",
                path.display()
            )));
        }

        let text = match PostingFormat::from_path(path) {
            PostingFormat::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            PostingFormat::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            PostingFormat::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            PostingFormat::Unknown => {
                return Err(JobTailorError::UnsupportedFormat(format!(
                    "Unsupported job posting file: {}",
                    path.display()
                )));
            }
        };

        Ok(text.trim().to_string())
    }
}
