//! Test utilities and shared fixtures for the getbuilds crates.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `content` as the resource file of `short_code` below `locales_dir`,
/// using the `<short_code>/getbuilds.ftl` layout.
pub fn write_locale_file(locales_dir: &Path, short_code: &str, content: &str) -> PathBuf {
    let dir = locales_dir.join(short_code);
    fs::create_dir_all(&dir).expect("Failed to create locale directory");
    let path = dir.join("getbuilds.ftl");
    fs::write(&path, content).expect("Failed to write locale file");
    path
}

/// Locale fixtures in the getbuilds resource format.
pub mod locale_fixtures {
    /// A small English resource with one placeholder message.
    pub fn english_ftl() -> &'static str {
        concat!(
            "## Page title\n",
            "language = Language\n",
            "title = Download trunk builds\n",
            "\n",
            "## Error messages\n",
            "nofiles = There are no prebuilt files for revision %s!\n",
            "invalidrev = Invalid revision number!\n",
        )
    }

    /// The German counterpart of [`english_ftl`].
    pub fn german_ftl() -> &'static str {
        concat!(
            "## Page title\n",
            "language = Sprache\n",
            "title = Trunk-Builds herunterladen\n",
            "\n",
            "## Error messages\n",
            "nofiles = Für Revision %s gibt es keine vorkompilierten Dateien!\n",
            "invalidrev = Ungültige Revisionsnummer!\n",
        )
    }

    /// A German resource that lacks `invalidrev` and drops the placeholder
    /// from `nofiles`.
    pub fn incomplete_german_ftl() -> &'static str {
        concat!(
            "language = Sprache\n",
            "title = Trunk-Builds herunterladen\n",
            "nofiles = Keine vorkompilierten Dateien!\n",
            "extra = Nur auf Deutsch\n",
        )
    }
}
