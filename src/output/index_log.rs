//! Append-only application index (`index.csv` and `index.jsonl`)

use crate::error::Result;
use csv::WriterBuilder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

const LIST_SEPARATOR: &str = " | ";

/// One generated application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub timestamp: String,
    pub company: String,
    pub role: String,
    pub lang: String,
    pub job_text_path: String,
    pub job_url: String,
    pub output_dir: String,
    pub files_generated: Vec<String>,
    pub must_keywords: Vec<String>,
    pub nice_keywords: Vec<String>,
    pub resp_keywords: Vec<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

fn default_status() -> String {
    "draft".to_string()
}

/// Flat CSV shape of a record; list fields are joined.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    timestamp: &'a str,
    company: &'a str,
    role: &'a str,
    lang: &'a str,
    job_text_path: &'a str,
    job_url: &'a str,
    output_dir: &'a str,
    files_generated: String,
    must_keywords: String,
    nice_keywords: String,
    resp_keywords: String,
    status: &'a str,
    notes: &'a str,
}

impl<'a> From<&'a ApplicationRecord> for CsvRow<'a> {
    fn from(rec: &'a ApplicationRecord) -> Self {
        Self {
            timestamp: &rec.timestamp,
            company: &rec.company,
            role: &rec.role,
            lang: &rec.lang,
            job_text_path: &rec.job_text_path,
            job_url: &rec.job_url,
            output_dir: &rec.output_dir,
            files_generated: rec.files_generated.join(LIST_SEPARATOR),
            must_keywords: rec.must_keywords.join(LIST_SEPARATOR),
            nice_keywords: rec.nice_keywords.join(LIST_SEPARATOR),
            resp_keywords: rec.resp_keywords.join(LIST_SEPARATOR),
            status: &rec.status,
            notes: &rec.notes,
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Append `rec` to the CSV index, writing the header only when the file is new.
pub fn append_to_index_csv(index_path: &Path, rec: &ApplicationRecord) -> Result<()> {
    ensure_parent(index_path)?;
    let exists = index_path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(index_path)?;

    let mut writer = WriterBuilder::new().has_headers(!exists).from_writer(file);
    writer.serialize(CsvRow::from(rec))?;
    writer.flush()?;

    debug!("Appended {} / {} to {}", rec.company, rec.role, index_path.display());
    Ok(())
}

/// Append `rec` as one JSON line.
pub fn append_to_index_jsonl(index_path: &Path, rec: &ApplicationRecord) -> Result<()> {
    ensure_parent(index_path)?;

    let mut line = serde_json::to_string(rec)?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(index_path)?;
    file.write_all(line.as_bytes())?;

    debug!("Appended {} / {} to {}", rec.company, rec.role, index_path.display());
    Ok(())
}
