//! CLI interface for jobtailor

use crate::output::DocumentFormat;
use crate::profile::LangMode;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extensions accepted for job posting files.
pub const JOB_TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "pdf"];

#[derive(Parser)]
#[command(name = "jobtailor")]
#[command(about = "Tailor a bilingual CV and cover letter to a job posting")]
#[command(long_about = "Extract keyword signals from a job posting, rank profile skills and experience bullets by relevance, and generate tailored documents with an application log")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate tailored documents for one application
    Generate {
        /// Path to the job posting (TXT, MD, PDF)
        #[arg(long)]
        job_text: PathBuf,

        /// URL of the job posting, recorded in the index
        #[arg(long, default_value = "")]
        job_url: String,

        /// Company name
        #[arg(long)]
        company: String,

        /// Role title
        #[arg(long)]
        role: String,

        /// Profile file (defaults to the configured one)
        #[arg(long)]
        cv_master: Option<PathBuf>,

        /// Output language
        #[arg(long, value_enum)]
        lang: Option<LangMode>,

        /// Output directory (defaults to the configured one)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Parsed job offer JSON used instead of keyword extraction
        #[arg(long)]
        signals: Option<PathBuf>,

        /// Maximum bullets kept per experience
        #[arg(long, allow_negative_numbers = true)]
        max_bullets: Option<i64>,

        /// Document format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<DocumentFormat>,
    },

    /// Show the keyword signals extracted from a job posting
    Signals {
        /// Path to the job posting (TXT, MD, PDF)
        #[arg(long)]
        job_text: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        format: String,
    },

    /// Rank profile skills and bullets against a job posting
    Rank {
        /// Path to the job posting (TXT, MD, PDF)
        #[arg(long)]
        job_text: PathBuf,

        /// Profile file (defaults to the configured one)
        #[arg(long)]
        cv_master: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalsFormat {
    Console,
    Json,
}

/// Parse and validate the signals output format
pub fn parse_signals_format(format: &str) -> Result<SignalsFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(SignalsFormat::Console),
        "json" => Ok(SignalsFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_arguments() {
        let cli = Cli::parse_from([
            "jobtailor",
            "generate",
            "--job-text",
            "job.txt",
            "--company",
            "Acme",
            "--role",
            "Frontend Engineer",
            "--lang",
            "en",
            "--max-bullets",
            "-1",
        ]);

        match cli.command {
            Commands::Generate {
                company,
                lang,
                max_bullets,
                job_url,
                ..
            } => {
                assert_eq!(company, "Acme");
                assert_eq!(lang, Some(LangMode::En));
                assert_eq!(max_bullets, Some(-1));
                assert_eq!(job_url, "");
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_signals_format() {
        assert_eq!(parse_signals_format("JSON"), Ok(SignalsFormat::Json));
        assert!(parse_signals_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("job.PDF"), JOB_TEXT_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("job.docx"), JOB_TEXT_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("job"), JOB_TEXT_EXTENSIONS).is_err());
    }
}
