/*!
 * Rich-text markup validation.
 *
 * Some labels carry inline rich text (`<b>No gamepad</b>`). This
 * validator checks that finished translations keep their style tags
 * balanced and do not drop tags the source relies on.
 */

use crate::catalog::{Message, TranslationCatalog};

/// Style tags checked for balance
const STYLE_TAGS: [&str; 3] = ["b", "i", "u"];

/// Types of markup issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupIssue {
    /// Opening and closing tag counts differ in the translation
    UnbalancedTag {
        tag: &'static str,
        open_count: usize,
        close_count: usize,
    },
    /// Tag used in the source is absent from the translation
    MissingTag {
        tag: &'static str,
    },
}

impl std::fmt::Display for MarkupIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupIssue::UnbalancedTag {
                tag,
                open_count,
                close_count,
            } => {
                write!(
                    f,
                    "Unbalanced <{}> tags: {} open, {} close",
                    tag, open_count, close_count
                )
            }
            MarkupIssue::MissingTag { tag } => {
                write!(f, "Translation drops the <{}> tag", tag)
            }
        }
    }
}

/// One markup finding, addressed by context and source
#[derive(Debug, Clone)]
pub struct MarkupFinding {
    /// Context of the offending message
    pub context: String,
    /// Source string of the offending message
    pub source: String,
    /// What went wrong
    pub issue: MarkupIssue,
}

/// Validator for rich-text tag preservation
pub struct MarkupValidator;

impl MarkupValidator {
    /// Check every finished message in the catalog
    pub fn validate(catalog: &TranslationCatalog) -> Vec<MarkupFinding> {
        let mut findings = Vec::new();

        for context in &catalog.contexts {
            for message in &context.messages {
                for issue in Self::check_message(message) {
                    findings.push(MarkupFinding {
                        context: context.name.clone(),
                        source: message.source.clone(),
                        issue,
                    });
                }
            }
        }

        findings
    }

    /// Check a single message for unbalanced or dropped style tags
    pub fn check_message(message: &Message) -> Vec<MarkupIssue> {
        if !message.is_active() || message.translation.is_empty() {
            return Vec::new();
        }

        let mut issues = Vec::new();

        for tag in STYLE_TAGS {
            let open_tag = format!("<{}>", tag);
            let close_tag = format!("</{}>", tag);

            let source_opens = message.source.matches(&open_tag).count();
            let open_count = message.translation.matches(&open_tag).count();
            let close_count = message.translation.matches(&close_tag).count();

            if open_count != close_count {
                issues.push(MarkupIssue::UnbalancedTag {
                    tag,
                    open_count,
                    close_count,
                });
            }

            if source_opens > 0 && open_count == 0 {
                issues.push(MarkupIssue::MissingTag { tag });
            }
        }

        issues
    }
}
