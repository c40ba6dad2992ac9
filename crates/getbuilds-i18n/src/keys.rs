//! Typed message keys, generated at build time from the reference resource

use std::fmt;

include!(concat!(env!("OUT_DIR"), "/message_keys.rs"));

impl AsRef<str> for MessageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Locale, LocalizationTable};

    #[test]
    fn test_keys_follow_reference_resource() {
        let table = LocalizationTable::embedded(Locale::REFERENCE).unwrap();

        assert_eq!(MessageKey::ALL.len(), table.len());
        for (key, entry) in MessageKey::ALL.iter().zip(table.entries()) {
            assert_eq!(key.as_str(), entry.key());
            assert_eq!(key.placeholder_count(), entry.placeholder_count());
        }
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(MessageKey::BuildbotStatus.as_str(), "buildbot_status");
        assert_eq!(MessageKey::Foundfiles.placeholder_count(), 1);
        assert_eq!(MessageKey::Title.placeholder_count(), 0);
        assert_eq!(MessageKey::Rangelimitexceeded.to_string(), "rangelimitexceeded");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(MessageKey::from_name("invalidrev"), Some(MessageKey::Invalidrev));
        assert_eq!(MessageKey::from_name("nosuchkey"), None);
    }
}
