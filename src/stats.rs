/*!
 * Coverage statistics over translation catalogs.
 *
 * Aggregates message status counts per context and per catalog, and
 * derives a coverage ratio (finished messages over messages still in
 * the UI). Serializable for machine consumption via `--json`.
 */

use serde::Serialize;

use crate::catalog::{Context, TranslationCatalog, TranslationStatus};

/// Status counts for one group of messages
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StatusCounts {
    /// Total messages counted
    pub messages: usize,
    /// Finished translations
    pub finished: usize,
    /// Entries still awaiting translation
    pub unfinished: usize,
    /// Entries whose source string left the UI
    pub vanished: usize,
    /// Entries retired by the extraction tooling
    pub obsolete: usize,
    /// Finished entries with an intentionally empty translation
    pub empty_finished: usize,
}

impl StatusCounts {
    fn add(&mut self, status: TranslationStatus, translation_empty: bool) {
        self.messages += 1;
        match status {
            TranslationStatus::Finished => {
                self.finished += 1;
                if translation_empty {
                    self.empty_finished += 1;
                }
            }
            TranslationStatus::Unfinished => self.unfinished += 1,
            TranslationStatus::Vanished => self.vanished += 1,
            TranslationStatus::Obsolete => self.obsolete += 1,
        }
    }

    /// Messages still shown in the UI, i.e. not retired
    pub fn active(&self) -> usize {
        self.messages - self.vanished - self.obsolete
    }

    /// Coverage ratio: finished over active messages, 0.0 when empty
    pub fn coverage(&self) -> f64 {
        let active = self.active();
        if active == 0 {
            0.0
        } else {
            self.finished as f64 / active as f64
        }
    }
}

/// Counts for one context
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContextStats {
    /// Context name
    pub name: String,

    /// Status counts within the context
    #[serde(flatten)]
    pub counts: StatusCounts,
}

/// Counts for a whole catalog
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogStats {
    /// File the catalog came from, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Language the catalog declares, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Number of contexts
    pub contexts: usize,

    /// Catalog-wide status counts
    #[serde(flatten)]
    pub counts: StatusCounts,

    /// Per-context breakdown, in file order
    pub per_context: Vec<ContextStats>,
}

impl CatalogStats {
    /// Compute statistics for a parsed catalog
    pub fn from_catalog(catalog: &TranslationCatalog) -> Self {
        let per_context: Vec<ContextStats> =
            catalog.contexts.iter().map(context_stats).collect();

        let mut counts = StatusCounts::default();
        for context in &catalog.contexts {
            for message in &context.messages {
                counts.add(message.status, message.translation.is_empty());
            }
        }

        CatalogStats {
            file: catalog
                .source_file
                .as_ref()
                .map(|p| p.display().to_string()),
            language: catalog.language.clone(),
            contexts: catalog.contexts.len(),
            counts,
            per_context,
        }
    }

    /// Coverage ratio for the whole catalog
    pub fn coverage(&self) -> f64 {
        self.counts.coverage()
    }
}

fn context_stats(context: &Context) -> ContextStats {
    let mut counts = StatusCounts::default();
    for message in &context.messages {
        counts.add(message.status, message.translation.is_empty());
    }

    ContextStats {
        name: context.name.clone(),
        counts,
    }
}
