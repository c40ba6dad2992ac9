//! Loading catalogs from embedded and on-disk resources

use getbuilds_common::test_utils::{create_temp_dir, init_test_logging, locale_fixtures, write_locale_file};
use getbuilds_i18n::{
    embedded_catalog, Catalog, I18nError, Locale, LocalizationTable, PlaceholderDrift,
    ResourceLoader,
};

#[test]
fn test_embedded_german_is_complete() {
    init_test_logging();

    let catalog = embedded_catalog().unwrap();
    assert_eq!(catalog.reference(), Locale::English);

    let reports = catalog.completeness();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].is_exact(), "{}", reports[0]);
    assert!(catalog.verify_complete().is_ok());
}

#[test]
fn test_embedded_german_formats() {
    let catalog = embedded_catalog().unwrap();
    let german = catalog.table(Locale::German).unwrap();

    assert_eq!(german.get("language").unwrap(), "Sprache");
    assert_eq!(german.format("foundfiles", &["5"]).unwrap(), "5 Dateien gefunden!");
    assert_eq!(
        german.format("rangelimitexceeded", &["100"]).unwrap(),
        "Der Revisionsbereich darf maximal 100 Revisionen umfassen!"
    );
}

#[test]
fn test_directory_overrides_embedded_resources() {
    init_test_logging();
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en", locale_fixtures::english_ftl());
    write_locale_file(dir.path(), "de", locale_fixtures::german_ftl());

    let catalog = Catalog::from_dir(dir.path(), Locale::English).unwrap();

    assert_eq!(catalog.locales(), vec![Locale::English, Locale::German]);
    assert_eq!(catalog.reference_table().len(), 4);
    assert_eq!(
        catalog.table(Locale::German).unwrap().format("nofiles", &["27154"]).unwrap(),
        "Für Revision 27154 gibt es keine vorkompilierten Dateien!"
    );
    assert!(catalog.verify_complete().is_ok());
}

#[test]
fn test_directory_without_german_loads_reference_only() {
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en", locale_fixtures::english_ftl());

    let catalog = Catalog::from_dir(dir.path(), Locale::English).unwrap();
    assert_eq!(catalog.locales(), vec![Locale::English]);
    assert!(matches!(
        catalog.table(Locale::German),
        Err(I18nError::UnknownLocale(_))
    ));
}

#[test]
fn test_directory_without_reference_fails() {
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "de", locale_fixtures::german_ftl());

    let err = Catalog::from_dir(dir.path(), Locale::English).unwrap_err();
    assert!(matches!(err, I18nError::UnknownLocale(ref code) if code == "en"));
}

#[test]
fn test_incomplete_translation_is_reported() {
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en", locale_fixtures::english_ftl());
    write_locale_file(dir.path(), "de", locale_fixtures::incomplete_german_ftl());

    let catalog = Catalog::from_dir(dir.path(), Locale::English).unwrap();
    let reports = catalog.completeness();
    let report = &reports[0];

    assert_eq!(report.locale, Locale::German);
    assert_eq!(report.missing, vec!["invalidrev".to_string()]);
    assert_eq!(report.extra, vec!["extra".to_string()]);
    assert_eq!(
        report.placeholder_mismatches,
        vec![PlaceholderDrift {
            key: "nofiles".to_string(),
            expected: 1,
            found: 0,
        }]
    );

    match catalog.verify_complete() {
        Err(I18nError::Incomplete(report)) => assert_eq!(report.locale, Locale::German),
        other => panic!("expected incomplete catalog, got {other:?}"),
    }
}

#[test]
fn test_duplicate_key_on_disk_is_rejected() {
    let dir = create_temp_dir();
    write_locale_file(
        dir.path(),
        "en",
        "title = Download trunk builds\ntitle = Download builds\n",
    );

    let err = ResourceLoader::from_dir(dir.path())
        .load(Locale::English)
        .unwrap_err();
    assert!(matches!(err, I18nError::DuplicateKey { ref key, .. } if key == "title"));
}

#[test]
fn test_placeable_on_disk_is_rejected() {
    let dir = create_temp_dir();
    write_locale_file(dir.path(), "en", "foundfiles = Found { $count } files!\n");

    let err = Catalog::from_dir(dir.path(), Locale::English).unwrap_err();
    assert!(matches!(err, I18nError::UnsupportedSyntax { ref key, .. } if key == "foundfiles"));
}

#[test]
fn test_literal_braces_on_disk_are_loaded() {
    let dir = create_temp_dir();
    write_locale_file(
        dir.path(),
        "en",
        "js = <a onclick=\"f({\"{\"}x{\"}\"})\">%s</a>\n",
    );

    let table = ResourceLoader::from_dir(dir.path())
        .load(Locale::English)
        .unwrap();
    assert_eq!(table.get("js").unwrap(), "<a onclick=\"f({x})\">%s</a>");
    assert_eq!(
        table.format("js", &["run"]).unwrap(),
        "<a onclick=\"f({x})\">run</a>"
    );
}

#[test]
fn test_tables_are_independent_values() {
    let english = LocalizationTable::embedded(Locale::English).unwrap();
    let german = LocalizationTable::embedded(Locale::German).unwrap();

    assert_eq!(english.keys(), german.keys());
    assert_ne!(english.get("title").unwrap(), german.get("title").unwrap());
}
