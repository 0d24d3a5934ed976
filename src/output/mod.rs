//! Generated documents and the application index

pub mod console;
pub mod index_log;
pub mod render;
pub mod summary;

pub use console::ConsoleFormatter;
pub use index_log::{append_to_index_csv, append_to_index_jsonl, ApplicationRecord};
pub use render::{
    renderer_for, CoverLetter, CvDocument, DocumentFormat, DocumentRenderer, JsonRenderer,
    MarkdownRenderer,
};
pub use summary::build_summary;
