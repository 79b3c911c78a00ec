use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::Catalog;
use crate::errors::{AppError, ConfigError};
use crate::language_utils;
use crate::merge::MergeOptions;

/// Configuration module
/// This module handles the merge configuration: option toggles, language
/// overrides applied to catalogs, and log verbosity.
/// Represents the merge configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Merge toggles
    #[serde(default)]
    pub merge: MergeOptions,

    /// Target language forced onto merged catalogs (e.g. "de_DE")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,

    /// Source language forced onto merged catalogs (e.g. "en")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Parse a configuration from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from_json_str(&content)?)
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for code in [&self.target_language, &self.source_language].into_iter().flatten() {
            language_utils::validate_language_code(code)
                .map_err(|e| ConfigError::InvalidLanguage(e.to_string()))?;
        }
        Ok(())
    }

    /// Apply the configured language overrides to a catalog
    ///
    /// Codes are normalized to the `ll_CC` form before being set.
    pub fn apply_languages(&self, catalog: &mut Catalog) -> Result<(), ConfigError> {
        if let Some(code) = &self.target_language {
            catalog.language_code = language_utils::normalize_language_code(code)
                .map_err(|e| ConfigError::InvalidLanguage(e.to_string()))?;
        }
        if let Some(code) = &self.source_language {
            catalog.source_language_code = language_utils::normalize_language_code(code)
                .map_err(|e| ConfigError::InvalidLanguage(e.to_string()))?;
        }
        Ok(())
    }
}
