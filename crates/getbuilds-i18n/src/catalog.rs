//! The set of locale tables an application serves

use crate::completeness::CompletenessReport;
use crate::error::{I18nError, I18nResult};
use crate::resource::ResourceLoader;
use crate::{Locale, LocalizationTable};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

static EMBEDDED: OnceCell<Catalog> = OnceCell::new();

/// The process-wide catalog built from the embedded resources.
///
/// Built on first use and shared read-only afterwards.
pub fn embedded_catalog() -> I18nResult<&'static Catalog> {
    EMBEDDED.get_or_try_init(Catalog::embedded)
}

/// Immutable collection of locale tables plus the reference locale they are
/// checked against.
///
/// Lookups never fall back to another locale; picking a fallback is up to the
/// caller.
#[derive(Debug, Clone)]
pub struct Catalog {
    reference: Locale,
    tables: HashMap<Locale, Arc<LocalizationTable>>,
}

impl Catalog {
    /// Assemble a catalog; `reference` must be among `tables` and each
    /// locale may appear only once
    pub fn new<I>(reference: Locale, tables: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = LocalizationTable>,
    {
        let mut tables_by_locale: HashMap<Locale, Arc<LocalizationTable>> = HashMap::new();
        for table in tables {
            let locale = table.locale();
            if tables_by_locale.insert(locale, Arc::new(table)).is_some() {
                return Err(I18nError::DuplicateLocale(locale.to_string()));
            }
        }

        if !tables_by_locale.contains_key(&reference) {
            return Err(I18nError::UnknownLocale(reference.to_string()));
        }

        Ok(Self {
            reference,
            tables: tables_by_locale,
        })
    }

    /// Load every available locale through `loader`
    pub fn load(loader: &ResourceLoader, reference: Locale) -> I18nResult<Self> {
        let catalog = Self::new(reference, loader.load_available()?)?;
        info!(
            "Catalog ready with locales {:?} (reference {})",
            catalog.locales(),
            reference
        );
        Ok(catalog)
    }

    /// Catalog of the resources compiled into this crate
    pub fn embedded() -> I18nResult<Self> {
        Self::load(&ResourceLoader::embedded(), Locale::REFERENCE)
    }

    /// Catalog of the resources found in a locales directory
    pub fn from_dir<P: AsRef<Path>>(dir: P, reference: Locale) -> I18nResult<Self> {
        Self::load(&ResourceLoader::from_dir(dir), reference)
    }

    /// The reference locale
    pub fn reference(&self) -> Locale {
        self.reference
    }

    /// The reference locale's table
    pub fn reference_table(&self) -> &Arc<LocalizationTable> {
        &self.tables[&self.reference]
    }

    /// The table for `locale`
    pub fn table(&self, locale: Locale) -> I18nResult<&Arc<LocalizationTable>> {
        self.tables
            .get(&locale)
            .ok_or_else(|| I18nError::UnknownLocale(locale.to_string()))
    }

    /// Loaded locales, sorted
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.tables.keys().copied().collect();
        locales.sort();
        locales
    }

    /// Completeness of every non-reference locale, sorted by locale
    pub fn completeness(&self) -> Vec<CompletenessReport> {
        let reference = self.reference_table();
        self.locales()
            .into_iter()
            .filter(|locale| *locale != self.reference)
            .map(|locale| self.tables[&locale].completeness_against(reference))
            .collect()
    }

    /// Fail with [`I18nError::Incomplete`] on the first locale that misses
    /// reference keys or changes placeholder counts
    pub fn verify_complete(&self) -> I18nResult<()> {
        for report in self.completeness() {
            if !report.extra.is_empty() {
                warn!(
                    "Locale {} defines keys unknown to {}: {:?}",
                    report.locale, report.reference, report.extra
                );
            }
            if !report.is_complete() {
                warn!("{}", report);
                return Err(I18nError::Incomplete(Box::new(report)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_must_be_loaded() {
        let german = LocalizationTable::from_pairs(Locale::German, [("title", "Titel")]).unwrap();
        let err = Catalog::new(Locale::English, [german]).unwrap_err();
        assert!(matches!(err, I18nError::UnknownLocale(ref code) if code == "en"));
    }

    #[test]
    fn test_duplicate_locale_is_rejected() {
        let first = LocalizationTable::from_pairs(Locale::English, [("title", "Title")]).unwrap();
        let second =
            LocalizationTable::from_pairs(Locale::English, [("title", "Other title")]).unwrap();

        let err = Catalog::new(Locale::English, [first, second]).unwrap_err();
        assert!(matches!(err, I18nError::DuplicateLocale(ref code) if code == "en"));
    }

    #[test]
    fn test_unknown_locale_has_no_fallback() {
        let english = LocalizationTable::from_pairs(Locale::English, [("title", "Title")]).unwrap();
        let catalog = Catalog::new(Locale::English, [english]).unwrap();

        assert!(catalog.table(Locale::English).is_ok());
        assert!(matches!(
            catalog.table(Locale::German),
            Err(I18nError::UnknownLocale(_))
        ));
        assert!(catalog.completeness().is_empty());
        assert!(catalog.verify_complete().is_ok());
    }

    #[test]
    fn test_verify_complete_reports_first_gap() {
        let english = LocalizationTable::from_pairs(
            Locale::English,
            [("title", "Title"), ("invalidrev", "Invalid revision number!")],
        )
        .unwrap();
        let german = LocalizationTable::from_pairs(Locale::German, [("title", "Titel")]).unwrap();
        let catalog = Catalog::new(Locale::English, [english, german]).unwrap();

        match catalog.verify_complete() {
            Err(I18nError::Incomplete(report)) => {
                assert_eq!(report.locale, Locale::German);
                assert_eq!(report.missing, vec!["invalidrev".to_string()]);
            }
            other => panic!("expected incomplete catalog, got {other:?}"),
        }
    }

    #[test]
    fn test_embedded_catalog_is_shared() {
        let first = embedded_catalog().unwrap();
        let second = embedded_catalog().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.locales(), vec![Locale::English, Locale::German]);
    }
}
