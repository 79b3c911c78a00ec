/*!
 * Error types for the catmerge library.
 *
 * The merge itself never fails; these errors cover the configuration layer
 * that sits around it, using the thiserror crate for ergonomic definitions.
 */

use thiserror::Error;

/// Errors that can occur while building or validating a merge configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A merge option name that is not recognised
    #[error("Invalid merge option: {0}")]
    InvalidOption(String),

    /// A language code that cannot be mapped to an ISO language
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    /// Malformed configuration document
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Main error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
