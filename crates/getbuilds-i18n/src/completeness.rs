//! Translation completeness checks between two locale tables

use crate::Locale;
use std::fmt;

/// A key whose placeholder count differs from the reference locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderDrift {
    /// The affected key
    pub key: String,
    /// Placeholder count in the reference locale
    pub expected: usize,
    /// Placeholder count in the checked locale
    pub found: usize,
}

/// Outcome of comparing one locale table against the reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessReport {
    /// The checked locale
    pub locale: Locale,
    /// The locale it was compared against
    pub reference: Locale,
    /// Reference keys the checked locale lacks, in reference order
    pub missing: Vec<String>,
    /// Keys only the checked locale defines, in its own order
    pub extra: Vec<String>,
    /// Keys present in both with different placeholder counts
    pub placeholder_mismatches: Vec<PlaceholderDrift>,
}

impl CompletenessReport {
    /// Every reference key is present with the same placeholder count.
    ///
    /// Extra keys do not make a table incomplete.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.placeholder_mismatches.is_empty()
    }

    /// Complete and without extra keys
    pub fn is_exact(&self) -> bool {
        self.is_complete() && self.extra.is_empty()
    }
}

impl fmt::Display for CompletenessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "locale {} against {}:", self.locale, self.reference)?;

        if self.is_exact() {
            return f.write_str(" complete");
        }
        if !self.missing.is_empty() {
            write!(f, " missing [{}]", self.missing.join(", "))?;
        }
        if !self.extra.is_empty() {
            write!(f, " extra [{}]", self.extra.join(", "))?;
        }
        if !self.placeholder_mismatches.is_empty() {
            let drift: Vec<String> = self
                .placeholder_mismatches
                .iter()
                .map(|d| format!("{} ({} != {})", d.key, d.found, d.expected))
                .collect();
            write!(f, " placeholders [{}]", drift.join(", "))?;
        }
        Ok(())
    }
}
