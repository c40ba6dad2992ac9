//! Supported locales and their embedded resources

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// File name of a locale's resource inside its directory
pub const RESOURCE_FILE_NAME: &str = "getbuilds.ftl";

/// Supported locales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    /// The reference locale every other table is checked against
    #[default]
    #[serde(rename = "en")]
    English,
    /// German
    #[serde(rename = "de")]
    German,
}

impl Locale {
    /// The locale other tables are validated against
    pub const REFERENCE: Self = Self::English;

    /// Get the language tag for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::German => "de-DE",
        }
    }

    /// Get the short language code for this locale
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }

    /// Parse a locale from a language code such as `en`, `de-DE` or `de_DE`
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" => Some(Self::English),
            "de" | "de-de" => Some(Self::German),
            _ => None,
        }
    }

    /// Convert to a `unic_langid` language identifier
    pub fn to_language_identifier(&self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        vec![Self::English, Self::German]
    }

    /// Get the name of the language in that language
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::German => "Deutsch",
        }
    }

    /// Resource path relative to a locales directory
    pub fn resource_file(&self) -> String {
        format!("{}/{}", self.short_code(), RESOURCE_FILE_NAME)
    }

    /// The resource compiled into this crate
    pub fn embedded_source(&self) -> &'static str {
        match self {
            Self::English => include_str!("../locales/en/getbuilds.ftl"),
            Self::German => include_str!("../locales/de/getbuilds.ftl"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_code())
    }
}
