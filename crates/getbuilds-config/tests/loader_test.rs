//! Loading a complete configuration file

use getbuilds_common::LogFormat;
use getbuilds_config::{Config, ConfigLoader};
use std::fs;

#[test]
fn test_full_config_round_trips_into_logging_config() {
    let dir = tempfile::tempdir().unwrap();
    let locales = dir.path().join("locales");
    fs::create_dir(&locales).unwrap();

    let path = dir.path().join("getbuilds.yaml");
    fs::write(
        &path,
        format!(
            "i18n:\n  default_locale: de_DE\n  locales_dir: {}\nlogging:\n  level: TRACE\n  format: plain\n  file: {}\n",
            locales.display(),
            dir.path().join("getbuilds.log").display()
        ),
    )
    .unwrap();

    let config = ConfigLoader::load_config_with(&path, |_| None).unwrap();
    assert_eq!(config.i18n.default_locale, "de_DE");
    assert!(config.i18n.require_complete);

    let logging = config.logging.to_logging_config();
    assert_eq!(logging.level, "trace");
    assert_eq!(logging.format, LogFormat::Plain);
    assert!(logging.file_path.unwrap().ends_with("getbuilds.log"));
}

#[test]
fn test_defaults_serialize_to_loadable_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("getbuilds.yaml");
    fs::write(&path, serde_yaml_string(&Config::default())).unwrap();

    let config = ConfigLoader::load_config_with(&path, |_| None).unwrap();
    assert_eq!(config.i18n.default_locale, "en");
    assert_eq!(config.logging.level, "info");
}

fn serde_yaml_string(config: &Config) -> String {
    serde_yaml::to_string(config).unwrap()
}
