//! Immutable key to display-string table for one locale

use crate::completeness::{CompletenessReport, PlaceholderDrift};
use crate::entry::LocalizationEntry;
use crate::error::{I18nError, I18nResult};
use crate::resource;
use crate::Locale;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Read-only lookup of display strings by key for one locale.
///
/// A table is built once and never changes afterwards, so it can be shared
/// between any number of readers (for example behind an `Arc`) without
/// locking. Keys are unique; definition order is kept for iteration.
#[derive(Debug, Clone)]
pub struct LocalizationTable {
    locale: Locale,
    entries: Vec<LocalizationEntry>,
    index: HashMap<String, usize>,
}

impl LocalizationTable {
    /// Build a table from entries, rejecting duplicate keys
    pub fn new<I>(locale: Locale, entries: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = LocalizationEntry>,
    {
        let mut table = Self {
            locale,
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for entry in entries {
            if table.index.contains_key(entry.key()) {
                return Err(I18nError::DuplicateKey {
                    key: entry.key().to_string(),
                    locale: locale.to_string(),
                });
            }
            table.index.insert(entry.key().to_string(), table.entries.len());
            table.entries.push(entry);
        }

        debug!("Built table for locale {} with {} messages", locale, table.len());
        Ok(table)
    }

    /// Build a table from `(key, value)` pairs
    pub fn from_pairs<I, K, V>(locale: Locale, pairs: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            locale,
            pairs
                .into_iter()
                .map(|(key, value)| LocalizationEntry::new(key, value)),
        )
    }

    /// Parse a table from resource text
    pub fn from_ftl(locale: Locale, source: &str) -> I18nResult<Self> {
        Self::new(locale, resource::parse_resource(locale, source)?)
    }

    /// Build the table compiled into this crate for `locale`
    pub fn embedded(locale: Locale) -> I18nResult<Self> {
        Self::from_ftl(locale, locale.embedded_source())
    }

    /// The locale this table serves
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up the full entry for `key`
    pub fn entry<K: AsRef<str>>(&self, key: K) -> I18nResult<&LocalizationEntry> {
        let key = key.as_ref();
        self.index
            .get(key)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| {
                debug!("Message '{}' not found in locale {}", key, self.locale);
                I18nError::MissingKey {
                    key: key.to_string(),
                    locale: self.locale.to_string(),
                }
            })
    }

    /// The display string for `key`, exactly as defined
    pub fn get<K: AsRef<str>>(&self, key: K) -> I18nResult<&str> {
        self.entry(key).map(LocalizationEntry::value)
    }

    /// The display string for `key` with `args` substituted in order.
    ///
    /// Fails with [`I18nError::PlaceholderMismatch`] unless exactly one
    /// argument is supplied per placeholder.
    pub fn format<K, A>(&self, key: K, args: &[A]) -> I18nResult<String>
    where
        K: AsRef<str>,
        A: AsRef<str>,
    {
        self.entry(key)?.render(args)
    }

    /// Whether `key` is defined
    pub fn contains<K: AsRef<str>>(&self, key: K) -> bool {
        self.index.contains_key(key.as_ref())
    }

    /// The full key set
    pub fn keys(&self) -> BTreeSet<&str> {
        self.entries.iter().map(LocalizationEntry::key).collect()
    }

    /// Entries in definition order
    pub fn entries(&self) -> &[LocalizationEntry] {
        &self.entries
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compare this table's key set and placeholder counts against `reference`
    pub fn completeness_against(&self, reference: &Self) -> CompletenessReport {
        let mut missing = Vec::new();
        let mut placeholder_mismatches = Vec::new();

        for expected in reference.entries() {
            match self.index.get(expected.key()).map(|&position| &self.entries[position]) {
                Some(found) if found.placeholder_count() != expected.placeholder_count() => {
                    placeholder_mismatches.push(PlaceholderDrift {
                        key: expected.key().to_string(),
                        expected: expected.placeholder_count(),
                        found: found.placeholder_count(),
                    });
                }
                Some(_) => {}
                None => missing.push(expected.key().to_string()),
            }
        }

        let extra = self
            .entries
            .iter()
            .filter(|entry| !reference.contains(entry.key()))
            .map(|entry| entry.key().to_string())
            .collect();

        CompletenessReport {
            locale: self.locale,
            reference: reference.locale,
            missing,
            extra,
            placeholder_mismatches,
        }
    }
}
