/*!
 * Tests for the application controller
 */

use tscat::app_config::Config;
use tscat::app_controller::Controller;
use tscat::catalog::TranslationCatalog;
use crate::common;

/// Test controller construction validates the configuration
#[test]
fn test_with_config_withBadLocale_shouldFail() {
    let mut config = Config::default();
    config.default_locale = Some("not a locale".to_string());

    assert!(Controller::with_config(config).is_err());
    assert!(Controller::new_for_test().is_ok());
}

/// Test query resolves hits and reports fallbacks
#[test]
fn test_query_withHitAndMiss_shouldReportFallback() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_catalog(&temp_dir.path().to_path_buf(), "app_zh-cn.ts").unwrap();
    let controller = Controller::new_for_test().unwrap();

    let (display, hit) = controller
        .query(&path, "GamePadDialog", "Select", None)
        .unwrap();
    assert_eq!(display, "选中");
    assert!(hit);

    let (display, hit) = controller
        .query(&path, "MainWindow", "DoesNotExist", None)
        .unwrap();
    assert_eq!(display, "DoesNotExist");
    assert!(!hit);

    let (display, hit) = controller
        .query(&path, "MainWindow", "Controls", Some("Controls window title"))
        .unwrap();
    assert_eq!(display, "控制器");
    assert!(hit);
}

/// Test the configured empty-translation policy reaches queries
#[test]
fn test_query_withEmptyFallbackConfigured_shouldFallBack() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_catalog(&temp_dir.path().to_path_buf(), "app_zh-cn.ts").unwrap();

    let default_controller = Controller::new_for_test().unwrap();
    let (display, hit) = default_controller
        .query(&path, "MainWindow", "G3D", None)
        .unwrap();
    assert_eq!(display, "");
    assert!(hit);

    let mut config = Config::default();
    config.empty_translation_fallback = true;
    let fallback_controller = Controller::with_config(config).unwrap();
    let (display, hit) = fallback_controller
        .query(&path, "MainWindow", "G3D", None)
        .unwrap();
    assert_eq!(display, "G3D");
    assert!(!hit);
}

/// Test querying a missing file errors
#[test]
fn test_query_withMissingFile_shouldFail() {
    let controller = Controller::new_for_test().unwrap();

    let result = controller.query(
        std::path::Path::new("/no/such/catalog.ts"),
        "MainWindow",
        "E&xit",
        None,
    );

    assert!(result.is_err());
}

/// Test validate passes clean catalogs and fails defective directories
#[test]
fn test_run_validate_withCleanAndDefectiveCatalogs_shouldJudgeEach() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(
        &dir,
        "clean_de.ts",
        &common::minimal_catalog_text(Some("de"), "Open", "Öffnen"),
    )
    .unwrap();
    let controller = Controller::new_for_test().unwrap();
    assert!(controller.run_validate(temp_dir.path(), false).unwrap());

    // A duplicated key drops the directory to failing
    let duplicated = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de">
<context>
    <name>MainWindow</name>
    <message>
        <source>Open</source>
        <translation>Öffnen</translation>
    </message>
    <message>
        <source>Open</source>
        <translation>Aufmachen</translation>
    </message>
</context>
</TS>
"#;
    common::create_test_file(&dir, "dup_de.ts", duplicated).unwrap();
    assert!(!controller.run_validate(temp_dir.path(), false).unwrap());
}

/// Test strict mode fails on warnings
#[test]
fn test_run_validate_withWarningOnly_shouldFailUnderStrict() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(
        &dir,
        "app_de.ts",
        &common::minimal_catalog_text(Some("de"), "E&xit", "Beenden"),
    )
    .unwrap();

    let controller = Controller::new_for_test().unwrap();

    assert!(controller.run_validate(temp_dir.path(), false).unwrap());
    assert!(!controller.run_validate(temp_dir.path(), true).unwrap());
}

/// Test fmt rewrites a catalog into the canonical layout
#[test]
fn test_run_fmt_withSampleCatalog_shouldRewriteCanonically() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_catalog(&dir, "app_zh-cn.ts").unwrap();
    let output = dir.join("canonical_zh-cn.ts");

    let controller = Controller::new_for_test().unwrap();
    controller.run_fmt(&input, Some(output.as_path())).unwrap();

    // The sample is already canonical, so the rewrite is identical
    let rewritten = std::fs::read_to_string(&output).unwrap();
    assert_eq!(rewritten, common::sample_catalog_text());

    // In-place rewrite leaves the file parseable and unchanged
    controller.run_fmt(&input, None).unwrap();
    let in_place = std::fs::read_to_string(&input).unwrap();
    assert_eq!(in_place, common::sample_catalog_text());
}

/// Test export writes a JSON rendition of the model
#[test]
fn test_run_export_withOutputFile_shouldWriteParseableJson() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_catalog(&dir, "app_zh-cn.ts").unwrap();
    let output = dir.join("app_zh-cn.json");

    let controller = Controller::new_for_test().unwrap();
    controller
        .run_export(&input, Some(output.as_path()), true)
        .unwrap();

    let json = std::fs::read_to_string(&output).unwrap();
    let restored: TranslationCatalog = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.message_count(), 9);
}

/// Test list reports served locales and judges selection misses
#[test]
fn test_run_list_withLocaleSelection_shouldJudgeServedLocales() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    common::create_test_catalog(&dir, "app_zh-cn.ts").unwrap();

    let controller = Controller::new_for_test().unwrap();

    assert!(controller.run_list(temp_dir.path(), None).unwrap());
    assert!(controller.run_list(temp_dir.path(), Some("zh")).unwrap());
    assert!(!controller.run_list(temp_dir.path(), Some("fr")).unwrap());

    // A configured default locale drives the selection when none is given
    let mut config = Config::default();
    config.default_locale = Some("fr".to_string());
    let french_default = Controller::with_config(config).unwrap();
    assert!(!french_default.run_list(temp_dir.path(), None).unwrap());
}

/// Test stats runs over files and directories without erroring
#[test]
fn test_run_stats_withFileAndDirectory_shouldSucceed() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let file = common::create_test_catalog(&dir, "app_zh-cn.ts").unwrap();

    let controller = Controller::new_for_test().unwrap();

    controller.run_stats(&file, false, true).unwrap();
    controller.run_stats(temp_dir.path(), true, false).unwrap();

    // A path that exists nowhere is an error
    assert!(controller
        .run_stats(std::path::Path::new("/no/such/path"), false, false)
        .is_err());
}
