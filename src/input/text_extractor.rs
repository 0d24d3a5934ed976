//! Text extraction from job posting files

use crate::error::{JobTailorError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            JobTailorError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Flatten Markdown to plain text, one block per line. Headings are kept
/// as text since they carry the section markers.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String| {
        let line = current.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
        current.clear();
    };

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak => current.push(' '),
            Event::HardBreak | Event::Start(Tag::List(_)) => flush(&mut current),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_)) => {
                flush(&mut current)
            }
            _ => {}
        }
    }
    flush(&mut current);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_keeps_headings_and_items() {
        let markdown = "# Frontend Engineer\n\n## Requirements\n\n- **React** and `TypeScript`\n- Git\n\nNice to have:\nJest";
        let text = markdown_to_text(markdown);

        assert_eq!(
            text,
            "Frontend Engineer\nRequirements\nReact and TypeScript\nGit\nNice to have: Jest"
        );
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_nested_list_items_stay_separate() {
        assert_eq!(markdown_to_text("- Skills\n  - React\n- Git"), "Skills\nReact\nGit");
        assert_eq!(markdown_to_text("- Must\n  - have: Vue"), "Must\nhave: Vue");
    }

    #[tokio::test]
    async fn test_plain_text_extractor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offer.txt");
        std::fs::write(&path, "Requisitos: React").unwrap();

        let text = PlainTextExtractor.extract(&path).await.unwrap();
        assert_eq!(text, "Requisitos: React");
    }
}
