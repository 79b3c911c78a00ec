/*!
 * Tests for error types and conversions
 */

use catmerge::errors::{AppError, ConfigError};

#[test]
fn test_configError_invalidOption_shouldDisplayCorrectly() {
    let error = ConfigError::InvalidOption("fuzzy".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid merge option"));
    assert!(display.contains("fuzzy"));
}

#[test]
fn test_configError_invalidLanguage_shouldDisplayCorrectly() {
    let error = ConfigError::InvalidLanguage("zz".to_string());
    assert_eq!(format!("{}", error), "Invalid language code: zz");
}

#[test]
fn test_configError_fromSerdeError_shouldWrapAsParseError() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let config_error: ConfigError = serde_error.into();
    assert!(matches!(config_error, ConfigError::Parse(_)));
    assert!(format!("{}", config_error).contains("Failed to parse configuration"));
}

#[test]
fn test_appError_fromConfigError_shouldWrapCorrectly() {
    let app_error: AppError = ConfigError::Parse("bad".to_string()).into();
    let display = format!("{}", app_error);
    assert!(display.contains("Configuration error"));
    assert!(display.contains("bad"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref m) if m == "something odd"));
}
