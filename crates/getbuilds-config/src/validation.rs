//! Custom validators used by the configuration schema

use getbuilds_common::LogFormat;
use std::path::Path;
use unic_langid::LanguageIdentifier;
use validator::ValidationError;

/// Validate a locale code such as `en` or `de-DE`
pub fn validate_locale_code(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() {
        return Err(ValidationError::new("empty_locale_code"));
    }

    code.replace('_', "-")
        .parse::<LanguageIdentifier>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_locale_code"))
}

/// Validate that a locales directory exists
pub fn validate_locales_dir(dir: &str) -> Result<(), ValidationError> {
    if dir.is_empty() {
        return Err(ValidationError::new("empty_locales_dir"));
    }

    if Path::new(dir).is_dir() {
        Ok(())
    } else {
        Err(ValidationError::new("locales_dir_not_found"))
    }
}

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate a log format name
pub fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    LogFormat::from_name(format)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("invalid_log_format"))
}
