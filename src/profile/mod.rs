//! Profile record model and loading

pub mod loader;
pub mod models;

pub use loader::load_cv_master;
pub use models::{CvMaster, Experience, Lang, LangMode};
