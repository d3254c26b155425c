use std::fmt;
use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use log::warn;

use crate::errors::CatalogError;

// @module: In-memory model for Qt Linguist TS catalogs

/// Lifecycle marker carried by the `type` attribute of a `<translation>`
/// element. A missing attribute means the translation is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// Translation is done and ships to users
    #[default]
    Finished,
    /// Source string still awaits translation
    Unfinished,
    /// Source string no longer exists but the entry is kept for reference
    Vanished,
    /// Entry was retired by the extraction tooling
    Obsolete,
}

impl TranslationStatus {
    /// Parse the `type` attribute value. `None` means finished.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            None => Self::Finished,
            Some("unfinished") => Self::Unfinished,
            Some("vanished") => Self::Vanished,
            Some("obsolete") => Self::Obsolete,
            Some(other) => {
                warn!("Unknown translation type '{}', treating as unfinished", other);
                Self::Unfinished
            }
        }
    }

    /// Attribute value to emit when serializing, or `None` for finished
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Finished => "finished",
            Self::Unfinished => "unfinished",
            Self::Vanished => "vanished",
            Self::Obsolete => "obsolete",
        };
        write!(f, "{}", name)
    }
}

/// Source-location hint attached to a message. Advisory only: written by
/// the extraction tooling, never consulted by lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Path of the source file the string was extracted from
    pub filename: String,

    /// Line number within that file, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Location {
    /// Create a new location hint - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(filename: impl Into<String>, line: Option<u32>) -> Self {
        Location {
            filename: filename.into(),
            line,
        }
    }
}

// @struct: Single translation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    // @field: Untranslated UI text, lookup key within its context
    pub source: String,

    // @field: Localized replacement text, possibly empty
    #[serde(default)]
    pub translation: String,

    // @field: Lifecycle status of the translation
    #[serde(default, skip_serializing_if = "is_finished")]
    pub status: TranslationStatus,

    // @field: Disambiguation comment, part of the lookup key when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    // @field: Free-text note left by the translator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,

    // @field: Source-location hints
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
}

fn is_finished(status: &TranslationStatus) -> bool {
    *status == TranslationStatus::Finished
}

impl Message {
    /// Creates a finished message - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Message {
            source: source.into(),
            translation: translation.into(),
            status: TranslationStatus::Finished,
            comment: None,
            translator_comment: None,
            locations: Vec::new(),
        }
    }

    /// Creates a message with an explicit status
    #[allow(dead_code)]
    pub fn with_status(
        source: impl Into<String>,
        translation: impl Into<String>,
        status: TranslationStatus,
    ) -> Self {
        Message {
            status,
            ..Message::new(source, translation)
        }
    }

    // @creates: Validated message
    // @validates: Non-empty source text
    #[allow(dead_code)]
    pub fn new_validated(source: String, translation: String) -> Result<Self> {
        if source.is_empty() {
            return Err(anyhow!("Empty source text in message"));
        }

        Ok(Message::new(source, translation))
    }

    /// Whether this entry participates in lookup. Unfinished, vanished and
    /// obsolete messages fall back to the source string.
    pub fn is_active(&self) -> bool {
        self.status == TranslationStatus::Finished
    }

    /// The disambiguation comment as a key fragment ("" when absent)
    pub fn comment_key(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }
}

/// Named grouping of messages corresponding to one UI surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Context name, e.g. a dialog or view class
    pub name: String,

    /// Messages belonging to this context, in file order
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Context {
    /// Create an empty context - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(name: impl Into<String>) -> Self {
        Context {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Find the first message for a source string, ignoring comments
    pub fn message(&self, source: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.source == source)
    }

    /// Find the message for a (source, comment) pair
    pub fn message_with_comment(&self, source: &str, comment: &str) -> Option<&Message> {
        self.messages
            .iter()
            .find(|m| m.source == source && m.comment_key() == comment)
    }
}

/// One parsed TS catalog: format version, language codes and contexts
/// in file order. Read-only after load; lookup never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCatalog {
    /// File the catalog was loaded from, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<PathBuf>,

    /// TS format version, e.g. "2.0"
    pub version: String,

    /// Target language code from the TS header, e.g. "zh_CN"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Source language code from the TS header, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,

    /// Contexts in file order
    #[serde(default)]
    pub contexts: Vec<Context>,
}

impl TranslationCatalog {
    /// Create an empty catalog for the given language
    pub fn new(language: Option<String>) -> Self {
        TranslationCatalog {
            source_file: None,
            version: "2.0".to_string(),
            language,
            source_language: None,
            contexts: Vec::new(),
        }
    }

    /// Parse a catalog from TS document text
    pub fn parse_str(text: &str) -> Result<Self, CatalogError> {
        super::reader::parse_str(text)
    }

    /// Parse a catalog from a TS file on disk
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut catalog = super::reader::parse_str(&text)?;
        catalog.source_file = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Serialize the catalog to the lupdate TS layout
    pub fn to_ts_string(&self) -> String {
        super::writer::serialize(self)
    }

    /// Write the catalog to a file, atomically
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CatalogError> {
        crate::file_utils::FileManager::write_atomic(path.as_ref(), &self.to_ts_string())
            .map_err(|e| CatalogError::Io(e.to_string()))
    }

    /// Find a context by name
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Find the first message for a (context, source) pair
    pub fn find_message(&self, context: &str, source: &str) -> Option<&Message> {
        self.context(context).and_then(|c| c.message(source))
    }

    /// Total number of messages across all contexts
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Whether the catalog carries no messages at all
    pub fn is_empty(&self) -> bool {
        self.contexts.iter().all(|c| c.messages.is_empty())
    }
}
