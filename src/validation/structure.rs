/*!
 * Structure validation for translation catalogs.
 *
 * Checks the catalog shape the parser deliberately tolerates: duplicate
 * lookup keys (first entry wins at parse time), empty context names and
 * sources, contexts with no messages, and locale tags the header
 * declares that no ISO table recognizes. Real catalogs ship with such
 * defects; validation surfaces them without refusing the file.
 */

use std::collections::HashSet;

use crate::catalog::TranslationCatalog;
use crate::language_utils;

/// Types of structure issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureIssue {
    /// Two messages share a (source, comment) key inside one context
    DuplicateMessage {
        context: String,
        source: String,
        comment: String,
    },
    /// A message with an empty source string
    EmptySource {
        context: String,
    },
    /// A context with an empty name
    EmptyContextName,
    /// A context without any messages
    EmptyContext {
        context: String,
    },
    /// The TS header declares a locale no ISO table recognizes
    InvalidLocale {
        tag: String,
    },
}

impl std::fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructureIssue::DuplicateMessage {
                context,
                source,
                comment,
            } => {
                if comment.is_empty() {
                    write!(f, "Duplicate message '{}' in context '{}'", source, context)
                } else {
                    write!(
                        f,
                        "Duplicate message '{}' (comment '{}') in context '{}'",
                        source, comment, context
                    )
                }
            }
            StructureIssue::EmptySource { context } => {
                write!(f, "Message with empty source in context '{}'", context)
            }
            StructureIssue::EmptyContextName => {
                write!(f, "Context with an empty name")
            }
            StructureIssue::EmptyContext { context } => {
                write!(f, "Context '{}' has no messages", context)
            }
            StructureIssue::InvalidLocale { tag } => {
                write!(f, "Unrecognized locale tag '{}' in TS header", tag)
            }
        }
    }
}

/// Validator for catalog shape and key uniqueness
pub struct StructureValidator;

impl StructureValidator {
    /// Check the whole catalog
    pub fn validate(catalog: &TranslationCatalog) -> Vec<StructureIssue> {
        let mut issues = Vec::new();

        if let Some(tag) = &catalog.language {
            if !locale_is_valid(tag) {
                issues.push(StructureIssue::InvalidLocale { tag: tag.clone() });
            }
        }

        for context in &catalog.contexts {
            if context.name.is_empty() {
                issues.push(StructureIssue::EmptyContextName);
            }

            if context.messages.is_empty() {
                issues.push(StructureIssue::EmptyContext {
                    context: context.name.clone(),
                });
                continue;
            }

            let mut seen: HashSet<(&str, &str)> = HashSet::new();
            for message in &context.messages {
                if message.source.is_empty() {
                    issues.push(StructureIssue::EmptySource {
                        context: context.name.clone(),
                    });
                    continue;
                }

                let key = (message.source.as_str(), message.comment_key());
                if !seen.insert(key) {
                    issues.push(StructureIssue::DuplicateMessage {
                        context: context.name.clone(),
                        source: message.source.clone(),
                        comment: message.comment_key().to_string(),
                    });
                }
            }
        }

        issues
    }
}

/// A locale tag is valid when it parses and its language subtag is a
/// known ISO 639 code
fn locale_is_valid(tag: &str) -> bool {
    match language_utils::parse_locale(tag) {
        Ok(locale) => language_utils::validate_language_code(&locale.language).is_ok(),
        Err(_) => false,
    }
}
