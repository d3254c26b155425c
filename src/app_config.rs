use anyhow::{Context as _, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::language_utils;
use crate::validation::ValidationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tscat.json";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Locale tag queries default to when none is given, e.g. "zh_CN"
    #[serde(default)]
    pub default_locale: Option<String>,

    /// Whether finished-but-empty translations fall back to the source
    /// string instead of rendering empty
    #[serde(default)]
    pub empty_translation_fallback: bool,

    /// Validation config
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity carried in the configuration file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        crate::file_utils::FileManager::write_to_file(path, &json)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate the default locale when one is configured
        if let Some(locale) = &self.default_locale {
            let parsed = language_utils::parse_locale(locale)
                .map_err(|e| anyhow!("Invalid default_locale: {}", e))?;
            language_utils::validate_language_code(&parsed.language)
                .map_err(|e| anyhow!("Invalid default_locale: {}", e))?;
        }

        Ok(())
    }

    /// Resolve the configuration file to use for an explicitly requested
    /// path: the explicit path wins; the bare default name additionally
    /// falls back to the user configuration directory when the working
    /// directory has no config file.
    pub fn resolve_path(explicit: &str) -> PathBuf {
        let explicit_path = PathBuf::from(explicit);
        if explicit != DEFAULT_CONFIG_FILE || explicit_path.exists() {
            return explicit_path;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("tscat").join(DEFAULT_CONFIG_FILE);
            if user_path.exists() {
                return user_path;
            }
        }

        explicit_path
    }
}
