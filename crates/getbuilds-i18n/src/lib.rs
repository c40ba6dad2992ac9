//! Localized UI strings for the getbuilds page
//!
//! The page lists downloadable prebuilt revisions. Its labels, tooltips and
//! error messages live in one immutable [`LocalizationTable`] per locale:
//!
//! - Locale resources in a plain-text Fluent layout, validated at build time
//! - Exact lookups with typed [`I18nError::MissingKey`] failures
//! - Positional `%s` substitution with argument count checks
//! - Translation completeness checks against the reference locale
//!
//! # Example
//!
//! ```rust
//! use getbuilds_i18n::{Locale, LocalizationTable, MessageKey};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let table = LocalizationTable::embedded(Locale::English)?;
//!
//! assert_eq!(table.get(MessageKey::Title)?, "Download trunk builds");
//! assert_eq!(table.format("foundfiles", &["5"])?, "Found 5 files!");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod completeness;
pub mod entry;
pub mod error;
pub mod keys;
pub mod locale;
pub mod placeholder;
pub mod resource;
pub mod table;

pub use catalog::{embedded_catalog, Catalog};
pub use completeness::{CompletenessReport, PlaceholderDrift};
pub use entry::LocalizationEntry;
pub use error::{I18nError, I18nResult};
pub use keys::MessageKey;
pub use locale::Locale;
pub use resource::{ResourceLoader, ResourceSource};
pub use table::LocalizationTable;
