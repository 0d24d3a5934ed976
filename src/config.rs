//! Configuration management for jobtailor

use crate::error::{JobTailorError, Result};
use crate::matching::MatchingConfig;
use crate::output::DocumentFormat;
use crate::profile::LangMode;
use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub profile: ProfileConfig,
    pub output: OutputConfig,
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub cv_master: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub out_dir: PathBuf,
    pub default_lang: LangMode,
    pub format: DocumentFormat,
    pub color_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileConfig {
                cv_master: PathBuf::from("data").join("cv_master.json"),
            },
            output: OutputConfig {
                out_dir: PathBuf::from("output"),
                default_lang: LangMode::Both,
                format: DocumentFormat::Markdown,
                color_output: true,
            },
            matching: MatchingConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path`, writing defaults on first use.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| JobTailorError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            debug!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            info!("Wrote default configuration to {}", path.display());
            Ok(config)
        }
    }

    /// Overwrite `path` with defaults without reading what is there.
    pub fn reset(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        info!("Reset configuration at {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| JobTailorError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("jobtailor")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.out_dir.as_os_str().is_empty() {
            return Err(JobTailorError::Configuration(
                "output.out_dir must not be empty".to_string(),
            ));
        }
        self.matching.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_written_on_first_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobtailor").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
        assert_eq!(config.output.default_lang, LangMode::Both);
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.output.out_dir = PathBuf::from("applications");
        config.output.format = DocumentFormat::Json;
        config.matching.bonus.must = 10;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_error_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "profile = [").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(JobTailorError::Configuration(_))
        ));
    }

    #[test]
    fn test_reset_recovers_unparseable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "profile = [").unwrap();

        let config = Config::reset(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_tables_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.matching.default_weight = 0;
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(JobTailorError::Configuration(_))
        ));
    }
}
