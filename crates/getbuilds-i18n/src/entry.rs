//! A single key/display-string pair

use crate::error::{I18nError, I18nResult};
use crate::placeholder;

/// One display string of a locale table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationEntry {
    key: String,
    value: String,
    placeholder_count: usize,
}

impl LocalizationEntry {
    /// Create an entry, deriving its placeholder count from `value`
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let placeholder_count = placeholder::count_placeholders(&value);
        Self {
            key: key.into(),
            value,
            placeholder_count,
        }
    }

    /// The stable identifier shared by every locale
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The display string exactly as defined
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of `%s` markers in the value
    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    /// Substitute `args` into the value's placeholders
    pub fn render<A: AsRef<str>>(&self, args: &[A]) -> I18nResult<String> {
        if args.len() != self.placeholder_count {
            return Err(I18nError::PlaceholderMismatch {
                key: self.key.clone(),
                expected: self.placeholder_count,
                actual: args.len(),
            });
        }

        Ok(placeholder::substitute(&self.value, args))
    }
}
