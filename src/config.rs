//! Configuration management for the ATS scorer

use crate::error::{AtsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keywords: KeywordConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Extra terms the tagger always treats as proper nouns
    pub custom_proper_nouns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub sample_size: usize,
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

/// Number of matched/missing keywords shown in a report
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            sample_size: DEFAULT_SAMPLE_SIZE,
            color_output: true,
            detailed: false,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when `None`.
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if !config_path.exists() {
            if path.is_some() {
                return Err(AtsError::Configuration(format!(
                    "Config file not found: {}",
                    config_path.display()
                )));
            }
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::from_toml(&content)?;
        log::debug!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| AtsError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.sample_size == 0 {
            return Err(AtsError::Configuration(
                "output.sample_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;
        Ok(config_path)
    }

    /// Write defaults to `path` (or the default location) without reading what is there
    pub fn reset(path: Option<&Path>) -> Result<PathBuf> {
        Self::default().save(path)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AtsError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-scorer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.sample_size, 10);
        assert_eq!(config.output.format, OutputFormat::Console);
        assert!(config.keywords.custom_proper_nouns.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml(
            r#"
            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.sample_size, DEFAULT_SAMPLE_SIZE);
        assert!(config.output.color_output);
    }

    #[test]
    fn test_zero_sample_size_rejected() {
        let result = Config::from_toml("[output]\nsample_size = 0\n");
        assert!(matches!(result, Err(AtsError::Configuration(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.keywords.custom_proper_nouns = vec!["fastapi".to_string()];
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_reset_repairs_invalid_and_creates_missing() {
        let dir = tempfile::tempdir().unwrap();

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[output]\nsample_size = 0\n").unwrap();
        assert!(Config::load(Some(&broken)).is_err());
        Config::reset(Some(&broken)).unwrap();
        assert_eq!(Config::load(Some(&broken)).unwrap(), Config::default());

        let fresh = dir.path().join("new").join("config.toml");
        assert_eq!(Config::reset(Some(&fresh)).unwrap(), fresh);
        assert_eq!(Config::load(Some(&fresh)).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(result.is_err());
    }
}
