//! Job posting format detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingFormat {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl PostingFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => PostingFormat::Pdf,
            "txt" | "text" => PostingFormat::Text,
            "md" | "markdown" => PostingFormat::Markdown,
            _ => PostingFormat::Unknown,
        }
    }

    /// Files without an extension are read as plain text.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(PostingFormat::Text, Self::from_extension)
    }
}
