/*!
 * Translation catalog handling for Qt Linguist TS files.
 *
 * This module contains the in-memory catalog model and the readers and
 * writers that move it to and from the TS on-disk format. It is split
 * into several submodules:
 *
 * - `model`: Catalog, context and message types
 * - `reader`: Event-driven TS XML parsing
 * - `writer`: Serialization back to the lupdate file layout
 */

// Re-export main types for easier usage
pub use self::model::{Context, Location, Message, TranslationCatalog, TranslationStatus};
pub use self::reader::parse_str;
pub use self::writer::serialize;

// Submodules
pub mod model;
pub mod reader;
pub mod writer;
