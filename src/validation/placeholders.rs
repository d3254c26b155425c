/*!
 * Placeholder validation for argument markers.
 *
 * UI strings interpolate runtime values through numbered markers
 * (`Button %1`, `Axes %1 Neg`). A finished translation that drops a
 * marker renders with a hole in it, so missing markers are the most
 * severe finding the validators produce.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{Message, TranslationCatalog};

/// Regex for numbered argument markers
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%\d+").expect("Invalid placeholder regex")
});

/// Types of placeholder issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderIssue {
    /// Marker present in the source but absent from the translation
    MissingPlaceholder {
        marker: String,
    },
    /// Marker repeated a different number of times than in the source
    CountMismatch {
        marker: String,
        source_count: usize,
        translation_count: usize,
    },
}

impl std::fmt::Display for PlaceholderIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceholderIssue::MissingPlaceholder { marker } => {
                write!(f, "Translation drops the '{}' placeholder", marker)
            }
            PlaceholderIssue::CountMismatch {
                marker,
                source_count,
                translation_count,
            } => {
                write!(
                    f,
                    "Placeholder '{}' appears {} times in source, {} in translation",
                    marker, source_count, translation_count
                )
            }
        }
    }
}

/// One placeholder finding, addressed by context and source
#[derive(Debug, Clone)]
pub struct PlaceholderFinding {
    /// Context of the offending message
    pub context: String,
    /// Source string of the offending message
    pub source: String,
    /// What went wrong
    pub issue: PlaceholderIssue,
}

/// Validator for argument markers
pub struct PlaceholderValidator;

impl PlaceholderValidator {
    /// Check every finished message in the catalog
    pub fn validate(catalog: &TranslationCatalog) -> Vec<PlaceholderFinding> {
        let mut findings = Vec::new();

        for context in &catalog.contexts {
            for message in &context.messages {
                for issue in Self::check_message(message) {
                    findings.push(PlaceholderFinding {
                        context: context.name.clone(),
                        source: message.source.clone(),
                        issue,
                    });
                }
            }
        }

        findings
    }

    /// Check a single message for dropped or miscounted markers
    pub fn check_message(message: &Message) -> Vec<PlaceholderIssue> {
        if !message.is_active() || message.translation.is_empty() {
            return Vec::new();
        }

        let source_markers = marker_counts(&message.source);
        let translation_markers = marker_counts(&message.translation);

        let mut issues = Vec::new();

        for (marker, source_count) in source_markers {
            match translation_markers.iter().find(|(m, _)| *m == marker) {
                None => issues.push(PlaceholderIssue::MissingPlaceholder { marker }),
                Some((_, translation_count)) if *translation_count != source_count => {
                    issues.push(PlaceholderIssue::CountMismatch {
                        marker,
                        source_count,
                        translation_count: *translation_count,
                    });
                }
                Some(_) => {}
            }
        }

        issues
    }
}

/// Distinct markers of a string with their occurrence counts, in order
/// of first appearance
fn marker_counts(text: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for m in PLACEHOLDER_REGEX.find_iter(text) {
        let marker = m.as_str().to_string();
        match counts.iter_mut().find(|(existing, _)| *existing == marker) {
            Some((_, count)) => *count += 1,
            None => counts.push((marker, 1)),
        }
    }

    counts
}
