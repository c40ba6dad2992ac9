//! Error types for localization lookups and resource loading

use crate::completeness::CompletenessReport;
use getbuilds_common::GetbuildsError;
use thiserror::Error;

/// Errors raised by localization tables and their loaders
#[derive(Error, Debug)]
pub enum I18nError {
    /// The requested key is absent from the table
    #[error("Message '{key}' not found in locale {locale}")]
    MissingKey {
        /// The key that was looked up
        key: String,
        /// Locale of the table
        locale: String,
    },

    /// The caller supplied the wrong number of format arguments
    #[error("Message '{key}' expects {expected} argument(s) but {actual} were supplied")]
    PlaceholderMismatch {
        /// The formatted key
        key: String,
        /// Placeholders in the entry
        expected: usize,
        /// Arguments supplied
        actual: usize,
    },

    /// No table is loaded for the requested locale
    #[error("Locale not loaded: {0}")]
    UnknownLocale(String),

    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to read a resource file
    #[error("Failed to load resource file: {path}")]
    ResourceLoad {
        /// Path of the resource file
        path: String,
        /// Read failure
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid Fluent syntax
    #[error("Failed to parse resource for locale {locale}: {errors:?}")]
    FluentParse {
        /// Locale of the resource
        locale: String,
        /// Parser diagnostics
        errors: Vec<String>,
    },

    /// A key is defined twice in one resource
    #[error("Duplicate message '{key}' in locale {locale}")]
    DuplicateKey {
        /// The repeated key
        key: String,
        /// Locale of the resource
        locale: String,
    },

    /// Two tables were supplied for the same locale
    #[error("Locale {0} supplied more than once")]
    DuplicateLocale(String),

    /// The resource uses Fluent features that plain display strings do not support
    #[error("Unsupported syntax in '{key}' for locale {locale}: {reason}")]
    UnsupportedSyntax {
        /// Key of the offending message
        key: String,
        /// Locale of the resource
        locale: String,
        /// What is not supported
        reason: String,
    },

    /// A locale's table does not cover the reference locale
    #[error("Incomplete translation: {0}")]
    Incomplete(Box<CompletenessReport>),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for GetbuildsError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::MissingKey { locale, .. }
            | I18nError::FluentParse { locale, .. }
            | I18nError::DuplicateKey { locale, .. }
            | I18nError::UnsupportedSyntax { locale, .. } => Some(locale.clone()),
            I18nError::UnknownLocale(locale) | I18nError::DuplicateLocale(locale) => {
                Some(locale.clone())
            }
            I18nError::Incomplete(report) => Some(report.locale.short_code().to_string()),
            _ => None,
        };

        GetbuildsError::Localization {
            message: err.to_string(),
            locale,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_key_display() {
        let err = I18nError::MissingKey {
            key: "nosuchkey".to_string(),
            locale: "en".to_string(),
        };
        assert_eq!(err.to_string(), "Message 'nosuchkey' not found in locale en");
    }

    #[test]
    fn test_placeholder_mismatch_display() {
        let err = I18nError::PlaceholderMismatch {
            key: "nofiles".to_string(),
            expected: 1,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "Message 'nofiles' expects 1 argument(s) but 0 were supplied"
        );
    }

    #[test]
    fn test_conversion_keeps_locale_and_source() {
        let err = I18nError::DuplicateKey {
            key: "title".to_string(),
            locale: "de".to_string(),
        };
        let converted: GetbuildsError = err.into();

        assert!(converted.source().is_some());
        match converted {
            GetbuildsError::Localization { locale, message, .. } => {
                assert_eq!(locale.as_deref(), Some("de"));
                assert!(message.contains("Duplicate message 'title'"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
