/*!
 * Tests for the per-language catalog repository
 */

use tscat::repository::CatalogRepository;
use crate::common;

/// Build a languages directory with a Chinese and a German catalog
fn sample_repository() -> (tempfile::TempDir, CatalogRepository) {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    common::create_test_catalog(&dir, "app_zh-cn.ts").unwrap();
    common::create_test_file(
        &dir,
        "app_de.ts",
        &common::minimal_catalog_text(Some("de"), "E&xit", "B&eenden"),
    )
    .unwrap();

    let repository = CatalogRepository::load_dir(temp_dir.path()).unwrap();
    (temp_dir, repository)
}

/// Test all catalogs in the directory are loaded
#[test]
fn test_load_dir_withTwoCatalogs_shouldLoadBoth() {
    let (_guard, repository) = sample_repository();

    assert_eq!(repository.len(), 2);
    assert!(!repository.is_empty());

    let mut locales = repository.locales();
    locales.sort();
    assert_eq!(locales, vec!["de", "zh_CN"]);
}

/// Test exact locale selection
#[test]
fn test_select_withExactLocale_shouldMatchCatalog() {
    let (_guard, repository) = sample_repository();

    let translator = repository.select("zh_CN").unwrap();
    assert_eq!(translator.translate("GamePadDialog", "Select"), "选中");
}

/// Test locale matching ignores case and separator
#[test]
fn test_select_withDifferentSeparator_shouldStillMatch() {
    let (_guard, repository) = sample_repository();

    assert!(repository.select("zh-cn").is_some());
    assert!(repository.select("ZH_cn").is_some());
    assert!(repository.get("zh-CN").is_some());
}

/// Test language-only selection falls back to a territory variant
#[test]
fn test_select_withLanguageOnly_shouldMatchTerritoryVariant() {
    let (_guard, repository) = sample_repository();

    let translator = repository.select("zh").unwrap();
    assert_eq!(translator.language(), Some("zh_CN"));
}

/// Test an unserved locale yields no catalog
#[test]
fn test_select_withUnservedLocale_shouldReturnNone() {
    let (_guard, repository) = sample_repository();

    assert!(repository.select("fr").is_none());
    assert!(repository.select("not a locale").is_none());
}

/// Test the locale falls back to the file-name suffix when the header
/// has no language attribute
#[test]
fn test_load_dir_withHeaderlessCatalog_shouldDeriveLocaleFromFilename() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(
        &dir,
        "app_pt-br.ts",
        &common::minimal_catalog_text(None, "E&xit", "S&air"),
    )
    .unwrap();

    let repository = CatalogRepository::load_dir(temp_dir.path()).unwrap();

    assert_eq!(repository.locales(), vec!["pt-br"]);
    assert!(repository.select("pt_BR").is_some());
    assert!(repository.catalog_path("pt-br").is_some());
}

/// Test catalogs in subdirectories are found
#[test]
fn test_load_dir_withNestedCatalog_shouldScanRecursively() {
    let temp_dir = common::create_temp_dir().unwrap();
    let nested = temp_dir.path().join("languages");
    std::fs::create_dir_all(&nested).unwrap();
    common::create_test_catalog(&nested.to_path_buf(), "app_zh-cn.ts").unwrap();

    let repository = CatalogRepository::load_dir(temp_dir.path()).unwrap();

    assert_eq!(repository.len(), 1);
}

/// Test a broken catalog fails the scan with its path
#[test]
fn test_load_dir_withBrokenCatalog_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "app_de.ts", "<TS version=\"2.0\"><context>").unwrap();

    let result = CatalogRepository::load_dir(temp_dir.path());

    assert!(result.is_err());
}

/// Test an empty directory yields an empty repository
#[test]
fn test_load_dir_withNoCatalogs_shouldBeEmpty() {
    let temp_dir = common::create_temp_dir().unwrap();

    let repository = CatalogRepository::load_dir(temp_dir.path()).unwrap();

    assert!(repository.is_empty());
    assert!(repository.select("de").is_none());
}
