//! Resource files: parsing and loading
//!
//! Each locale is defined by a Fluent file (`<code>/getbuilds.ftl`) holding one
//! `key = value` message per line. Only plain text values are accepted, plus
//! string literal placeables (`{"{"}`) for characters Fluent reserves.
//! Substitution markers are positional `%s`, so other placeables,
//! attributes and terms are rejected.

use crate::entry::LocalizationEntry;
use crate::error::{I18nError, I18nResult};
use crate::{Locale, LocalizationTable};
use fluent_syntax::ast::{Entry, Expression, InlineExpression, PatternElement};
use fluent_syntax::parser::parse;
use fluent_syntax::unicode::unescape_unicode_to_string;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Parse resource text into entries, in definition order
pub fn parse_resource(locale: Locale, source: &str) -> I18nResult<Vec<LocalizationEntry>> {
    let resource = parse(source).map_err(|(_, errors)| {
        let error_messages: Vec<String> = errors.into_iter().map(|e| format!("{:?}", e)).collect();

        error!("Failed to parse resource for locale {}: {:?}", locale, error_messages);

        I18nError::FluentParse {
            locale: locale.to_string(),
            errors: error_messages,
        }
    })?;

    let unsupported = |key: &str, reason: &str| I18nError::UnsupportedSyntax {
        key: key.to_string(),
        locale: locale.to_string(),
        reason: reason.to_string(),
    };

    let mut entries = Vec::new();

    for entry in resource.body {
        match entry {
            Entry::Message(message) => {
                let key = message.id.name;

                if !message.attributes.is_empty() {
                    return Err(unsupported(key, "attributes are not supported"));
                }

                let pattern = message
                    .value
                    .ok_or_else(|| unsupported(key, "message has no value"))?;

                let mut value = String::new();
                for element in pattern.elements {
                    match element {
                        PatternElement::TextElement { value: text } => value.push_str(text),
                        PatternElement::Placeable {
                            expression:
                                Expression::Inline(InlineExpression::StringLiteral { value: literal }),
                        } => value.push_str(&unescape_unicode_to_string(literal)),
                        PatternElement::Placeable { .. } => {
                            return Err(unsupported(
                                key,
                                "only string literal placeables are supported, use %s for substitutions",
                            ));
                        }
                    }
                }

                entries.push(LocalizationEntry::new(key, value));
            }
            Entry::Term(term) => {
                return Err(unsupported(&format!("-{}", term.id.name), "terms are not supported"));
            }
            _ => {}
        }
    }

    Ok(entries)
}

/// Where locale resources are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSource {
    /// The files compiled into this crate
    Embedded,
    /// A locales directory laid out as `<code>/getbuilds.ftl`
    Directory(PathBuf),
}

/// Loads locale tables from a [`ResourceSource`]
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    source: ResourceSource,
}

impl ResourceLoader {
    /// Load the resources compiled into this crate
    pub fn embedded() -> Self {
        Self {
            source: ResourceSource::Embedded,
        }
    }

    /// Load resources from a locales directory
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            source: ResourceSource::Directory(dir.as_ref().to_path_buf()),
        }
    }

    /// The configured source
    pub fn source(&self) -> &ResourceSource {
        &self.source
    }

    /// Path of the resource file for `locale`, if loading from disk
    pub fn resource_path(&self, locale: Locale) -> Option<PathBuf> {
        match &self.source {
            ResourceSource::Embedded => None,
            ResourceSource::Directory(dir) => Some(dir.join(locale.resource_file())),
        }
    }

    /// Whether a resource exists for `locale`
    pub fn has_resource(&self, locale: Locale) -> bool {
        self.resource_path(locale).map_or(true, |path| path.is_file())
    }

    /// Read the raw resource text for `locale`
    pub fn read_source(&self, locale: Locale) -> I18nResult<Cow<'static, str>> {
        match self.resource_path(locale) {
            None => Ok(Cow::Borrowed(locale.embedded_source())),
            Some(path) => {
                debug!("Loading resource file: {:?}", path);
                fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| I18nError::ResourceLoad {
                        path: path.to_string_lossy().to_string(),
                        source,
                    })
            }
        }
    }

    /// Load and validate the table for `locale`
    pub fn load(&self, locale: Locale) -> I18nResult<LocalizationTable> {
        let source = self.read_source(locale)?;
        let table = LocalizationTable::from_ftl(locale, &source)?;
        info!("Loaded {} messages for locale {}", table.len(), locale);
        Ok(table)
    }

    /// Load every supported locale that has a resource
    pub fn load_available(&self) -> I18nResult<Vec<LocalizationTable>> {
        let mut tables = Vec::new();
        for locale in Locale::all() {
            if self.has_resource(locale) {
                tables.push(self.load(locale)?);
            } else {
                debug!("No resource for locale {}, skipping", locale);
            }
        }
        Ok(tables)
    }
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::embedded()
    }
}
