use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Locale utilities for the language tags carried by TS catalogs
///
/// This module parses, normalizes and matches locale tags of the
/// `ll[_CC]` shape found in TS headers and catalog file names
/// ("zh_CN", "pt-br"). Language subtags are validated against
/// ISO 639-1/639-3 code tables.
/// Shape of a locale tag: language subtag plus optional territory
static LOCALE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z]{2,3}(?:[_-][a-z0-9]{2,4})?$").expect("Invalid locale tag regex")
});

/// A locale tag split into its subtags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Lowercase language subtag, e.g. "zh"
    pub language: String,

    /// Uppercase territory subtag when present, e.g. "CN"
    pub territory: Option<String>,
}

impl Locale {
    /// Canonical `ll_CC` rendering of the tag
    pub fn to_tag(&self) -> String {
        match &self.territory {
            Some(territory) => format!("{}_{}", self.language, territory),
            None => self.language.clone(),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_tag())
    }
}

/// Parse a locale tag, accepting either separator and any case
pub fn parse_locale(tag: &str) -> Result<Locale> {
    let trimmed = tag.trim();
    if !LOCALE_TAG_REGEX.is_match(trimmed) {
        return Err(anyhow!("Invalid locale tag: {}", tag));
    }

    let mut parts = trimmed.splitn(2, ['_', '-']);
    let language = parts
        .next()
        .ok_or_else(|| anyhow!("Invalid locale tag: {}", tag))?
        .to_lowercase();
    let territory = parts.next().map(|t| t.to_uppercase());

    Ok(Locale {
        language,
        territory,
    })
}

/// Validate that a locale's language subtag is a real ISO 639 code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized_code = code.trim().to_lowercase();

    // Check for ISO 639-1 (2-letter) code
    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(());
        }
    }
    // Check for ISO 639-3 (3-letter) code
    else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(());
        }
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Normalize a locale tag to canonical `ll_CC` form
pub fn normalize_locale(tag: &str) -> Result<String> {
    Ok(parse_locale(tag)?.to_tag())
}

/// Check if two locale tags denote the same locale, ignoring case and
/// separator differences ("zh-cn" matches "zh_CN")
pub fn locales_match(tag1: &str, tag2: &str) -> bool {
    match (parse_locale(tag1), parse_locale(tag2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Check if two locale tags share a language, ignoring territories
/// ("zh" matches "zh_CN")
pub fn languages_match(tag1: &str, tag2: &str) -> bool {
    match (parse_locale(tag1), parse_locale(tag2)) {
        (Ok(a), Ok(b)) => a.language == b.language,
        _ => false,
    }
}

/// Get the English language name for a locale tag
pub fn language_name(tag: &str) -> Result<String> {
    let locale = parse_locale(tag)?;

    let language = match locale.language.len() {
        2 => Language::from_639_1(&locale.language),
        3 => Language::from_639_3(&locale.language),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Unknown language subtag: {}", locale.language))?;

    Ok(language.to_name().to_string())
}

/// Derive a locale tag from a catalog file stem, e.g. "app_zh-cn"
/// yields "zh-cn". Returns `None` when the stem has no locale suffix.
pub fn locale_from_stem(stem: &str) -> Option<String> {
    let suffix = match stem.rsplit_once('_') {
        Some((_, suffix)) => suffix,
        None => stem,
    };

    if LOCALE_TAG_REGEX.is_match(suffix) {
        Some(suffix.to_string())
    } else {
        None
    }
}
