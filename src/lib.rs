//! jobtailor library

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod generate;
pub mod input;
pub mod matching;
pub mod output;
pub mod profile;

pub use config::Config;
pub use error::{JobTailorError, Result};
