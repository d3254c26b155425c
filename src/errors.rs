/*!
 * Error types for the tscat application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while reading or writing a translation catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error reading or writing the catalog file
    #[error("File error: {0}")]
    Io(String),

    /// The file is not well-formed XML
    #[error("Malformed catalog at byte {offset}: {message}")]
    Malformed {
        /// Byte offset into the document where the parser stopped
        offset: u64,
        /// Description of the problem
        message: String,
    },

    /// A `<context>` element has no `<name>` child
    #[error("Context without a name at byte {0}")]
    MissingContextName(u64),

    /// A `<message>` element appeared outside a `<context>`
    #[error("Message outside of any context at byte {0}")]
    MessageOutsideContext(u64),

    /// A `<message>` element has no `<source>` child
    #[error("Message without a source in context '{context}'")]
    MissingSource {
        /// Name of the enclosing context
        context: String,
    },

    /// The root element is not `<TS>`
    #[error("Not a TS document: root element is '{0}'")]
    NotTsDocument(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

/// Errors that can occur when selecting catalogs from a repository
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The languages directory does not exist or is unreadable
    #[error("Cannot scan catalog directory: {0}")]
    Scan(String),

    /// A catalog in the directory failed to parse
    #[error("Catalog '{path}' failed to load: {source}")]
    Load {
        /// Path of the offending catalog
        path: String,
        /// Underlying parse error
        #[source]
        source: CatalogError,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from catalog parsing or serialization
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error from the catalog repository
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
