/*!
 * Translation lookup with source-string fallback.
 *
 * A `Translator` is built once from a parsed catalog and answers
 * `(context, source)` queries afterwards. It is immutable by
 * construction: no interior mutability, no locks, safe to share
 * between threads.
 */

use std::collections::HashMap;
use log::debug;

use crate::catalog::TranslationCatalog;

/// Lookup key combining context name, source string and disambiguation comment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MessageKey {
    /// Context the string belongs to
    context: String,

    /// Untranslated source text
    source: String,

    /// Disambiguation comment, empty when the message carries none
    comment: String,
}

impl MessageKey {
    /// Create a new lookup key
    fn new(context: &str, source: &str, comment: &str) -> Self {
        Self {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.to_string(),
        }
    }
}

/// Immutable lookup table over one catalog's finished translations
#[derive(Debug, Clone)]
pub struct Translator {
    /// Language code the catalog declared, when present
    language: Option<String>,

    /// Internal table storage
    table: HashMap<MessageKey, String>,
}

impl Translator {
    /// Build a translator from a catalog.
    ///
    /// Only finished messages enter the table; unfinished, vanished and
    /// obsolete entries fall back to the source string at query time. A
    /// finished message with an empty translation is a real entry: the
    /// query returns the empty string, not the source.
    pub fn from_catalog(catalog: &TranslationCatalog) -> Self {
        Self::with_policy(catalog, false)
    }

    /// Build a translator with an explicit empty-translation policy.
    ///
    /// With `empty_falls_back` set, finished-but-empty entries are left
    /// out of the table so queries fall back to the source string. The
    /// default keeps them authoritative.
    pub fn with_policy(catalog: &TranslationCatalog, empty_falls_back: bool) -> Self {
        let mut table = HashMap::new();

        for context in &catalog.contexts {
            for message in &context.messages {
                if !message.is_active() {
                    continue;
                }
                if empty_falls_back && message.translation.is_empty() {
                    continue;
                }

                let key = MessageKey::new(&context.name, &message.source, message.comment_key());
                // First entry wins on duplicate keys; the structure
                // validator reports the duplicate.
                table.entry(key).or_insert_with(|| message.translation.clone());
            }
        }

        debug!(
            "Built translator for '{}' with {} entries",
            catalog.language.as_deref().unwrap_or("?"),
            table.len()
        );

        Self {
            language: catalog.language.clone(),
            table,
        }
    }

    /// Language code of the underlying catalog
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Raw lookup: the authored translation, or `None` when no entry matches
    pub fn lookup(&self, context: &str, source: &str) -> Option<&str> {
        self.lookup_with_comment(context, source, "")
    }

    /// Raw lookup with a disambiguation comment.
    ///
    /// Tries the exact `(context, source, comment)` key first, then
    /// retries with the empty comment, mirroring how Qt resolves
    /// disambiguated strings.
    pub fn lookup_with_comment(&self, context: &str, source: &str, comment: &str) -> Option<&str> {
        let key = MessageKey::new(context, source, comment);
        if let Some(translation) = self.table.get(&key) {
            return Some(translation.as_str());
        }

        if !comment.is_empty() {
            let bare = MessageKey::new(context, source, "");
            return self.table.get(&bare).map(|t| t.as_str());
        }

        None
    }

    /// Translate with fallback: a missing entry returns the source string
    /// unchanged. Pure and repeatable; a miss is not an error.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.translate_with_comment(context, source, "")
    }

    /// Translate with a disambiguation comment and fallback
    pub fn translate_with_comment<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: &str,
    ) -> &'a str {
        match self.lookup_with_comment(context, source, comment) {
            Some(translation) => translation,
            None => {
                debug!(
                    "No translation for '{}' in context '{}', falling back to source",
                    truncate_text(source, 30),
                    context
                );
                source
            }
        }
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.len() <= max_length {
        text.to_string()
    } else {
        let mut end = max_length;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
