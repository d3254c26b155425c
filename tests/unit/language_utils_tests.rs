/*!
 * Tests for locale tag utilities
 */

use tscat::language_utils::{
    language_name, languages_match, locale_from_stem, locales_match, normalize_locale,
    parse_locale, validate_language_code,
};

/// Test locale parsing splits subtags and normalizes case
#[test]
fn test_parse_locale_withMixedCase_shouldNormalizeSubtags() {
    let locale = parse_locale("zh-CN").unwrap();
    assert_eq!(locale.language, "zh");
    assert_eq!(locale.territory.as_deref(), Some("CN"));

    let locale = parse_locale("PT_br").unwrap();
    assert_eq!(locale.language, "pt");
    assert_eq!(locale.territory.as_deref(), Some("BR"));

    let locale = parse_locale("de").unwrap();
    assert_eq!(locale.language, "de");
    assert_eq!(locale.territory, None);
}

/// Test invalid shapes are rejected
#[test]
fn test_parse_locale_withInvalidShapes_shouldFail() {
    assert!(parse_locale("english").is_err());
    assert!(parse_locale("").is_err());
    assert!(parse_locale("zh_CN_Hans_x").is_err());
    assert!(parse_locale("z h").is_err());
}

/// Test canonical rendering
#[test]
fn test_normalize_locale_withSeparatorVariants_shouldCanonicalize() {
    assert_eq!(normalize_locale("zh-cn").unwrap(), "zh_CN");
    assert_eq!(normalize_locale("pt-br").unwrap(), "pt_BR");
    assert_eq!(normalize_locale("DE").unwrap(), "de");
}

/// Test locale equivalence ignores case and separator
#[test]
fn test_locales_match_withEquivalentTags_shouldMatch() {
    assert!(locales_match("zh_CN", "zh-cn"));
    assert!(locales_match("de", "DE"));
    assert!(!locales_match("zh_CN", "zh_TW"));
    assert!(!locales_match("zh_CN", "zh"));
    assert!(!locales_match("bogus tag", "bogus tag"));
}

/// Test language-only matching ignores territories
#[test]
fn test_languages_match_withTerritoryVariants_shouldMatch() {
    assert!(languages_match("zh", "zh_CN"));
    assert!(languages_match("zh_TW", "zh_CN"));
    assert!(!languages_match("de", "fr"));
}

/// Test ISO 639 validation of language subtags
#[test]
fn test_validate_language_code_withKnownAndBogusCodes_shouldJudge() {
    assert!(validate_language_code("de").is_ok());
    assert!(validate_language_code("zh").is_ok());
    assert!(validate_language_code("deu").is_ok());

    // "cn" is a country, not a language - the classic catalog typo
    assert!(validate_language_code("cn").is_err());
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("q").is_err());
}

/// Test English language names
#[test]
fn test_language_name_withLocaleTags_shouldResolveNames() {
    assert_eq!(language_name("de").unwrap(), "German");
    assert_eq!(language_name("zh_CN").unwrap(), "Chinese");
    assert!(language_name("xx").is_err());
}

/// Test locale extraction from catalog file stems
#[test]
fn test_locale_from_stem_withCatalogNames_shouldExtractSuffix() {
    assert_eq!(locale_from_stem("app_zh-cn").as_deref(), Some("zh-cn"));
    assert_eq!(locale_from_stem("app_pt-br").as_deref(), Some("pt-br"));
    assert_eq!(locale_from_stem("app_de").as_deref(), Some("de"));
    assert_eq!(locale_from_stem("my_app_fr").as_deref(), Some("fr"));
    assert_eq!(locale_from_stem("translations"), None);
}
