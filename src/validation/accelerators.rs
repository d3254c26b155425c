/*!
 * Accelerator mnemonic validation.
 *
 * Menu and dialog labels mark their keyboard shortcut with an ampersand
 * (`E&xit` underlines the x). Translations must keep a mnemonic so the
 * shortcut survives localization; CJK catalogs conventionally prepend
 * one in parentheses (`(&X)退出`). A doubled ampersand is a literal `&`
 * and carries no mnemonic.
 */

use crate::catalog::{Message, TranslationCatalog};

/// Types of accelerator issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceleratorIssue {
    /// Source has a mnemonic but the translation lost it
    MissingAccelerator {
        mnemonic: char,
    },
    /// Translation carries more than one mnemonic
    MultipleAccelerators {
        count: usize,
    },
}

impl std::fmt::Display for AcceleratorIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcceleratorIssue::MissingAccelerator { mnemonic } => {
                write!(f, "Translation drops the '&{}' accelerator mnemonic", mnemonic)
            }
            AcceleratorIssue::MultipleAccelerators { count } => {
                write!(f, "Translation carries {} accelerator mnemonics", count)
            }
        }
    }
}

/// One accelerator finding, addressed by context and source
#[derive(Debug, Clone)]
pub struct AcceleratorFinding {
    /// Context of the offending message
    pub context: String,
    /// Source string of the offending message
    pub source: String,
    /// What went wrong
    pub issue: AcceleratorIssue,
}

/// Validator for keyboard mnemonics
pub struct AcceleratorValidator;

impl AcceleratorValidator {
    /// Check every finished message in the catalog
    pub fn validate(catalog: &TranslationCatalog) -> Vec<AcceleratorFinding> {
        let mut findings = Vec::new();

        for context in &catalog.contexts {
            for message in &context.messages {
                for issue in Self::check_message(message) {
                    findings.push(AcceleratorFinding {
                        context: context.name.clone(),
                        source: message.source.clone(),
                        issue,
                    });
                }
            }
        }

        findings
    }

    /// Check a single message. Only finished, non-empty translations are
    /// held to the mnemonic rule; everything else falls back to source
    /// at display time anyway.
    pub fn check_message(message: &Message) -> Vec<AcceleratorIssue> {
        if !message.is_active() || message.translation.is_empty() {
            return Vec::new();
        }

        let source_mnemonics = mnemonics(&message.source);
        let translation_mnemonics = mnemonics(&message.translation);

        let mut issues = Vec::new();

        if let Some(&mnemonic) = source_mnemonics.first() {
            if translation_mnemonics.is_empty() {
                issues.push(AcceleratorIssue::MissingAccelerator { mnemonic });
            }
        }

        if translation_mnemonics.len() > 1 {
            issues.push(AcceleratorIssue::MultipleAccelerators {
                count: translation_mnemonics.len(),
            });
        }

        issues
    }
}

/// Mnemonic characters of a label, in order. `&&` escapes a literal
/// ampersand and is not a mnemonic; a trailing `&` marks nothing.
pub fn mnemonics(text: &str) -> Vec<char> {
    let mut result = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        match chars.peek() {
            Some('&') => {
                chars.next();
            }
            Some(&next) if next.is_alphanumeric() => {
                result.push(next);
                chars.next();
            }
            _ => {}
        }
    }

    result
}
