use log::warn;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::model::{Context, Location, Message, TranslationCatalog, TranslationStatus};
use crate::errors::CatalogError;

// @module: Event-driven parser for the Qt Linguist TS format

/// Text-bearing element the parser is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    ContextName,
    Source,
    Translation,
    Comment,
    TranslatorComment,
}

/// Message under construction; committed when `</message>` closes
#[derive(Debug, Default)]
struct MessageDraft {
    source: Option<String>,
    translation: Option<String>,
    status: TranslationStatus,
    comment: Option<String>,
    translator_comment: Option<String>,
    locations: Vec<Location>,
}

/// Context under construction; committed when `</context>` closes
#[derive(Debug, Default)]
struct ContextDraft {
    name: Option<String>,
    messages: Vec<Message>,
}

/// Parse a TS document into a catalog.
///
/// Text payloads are committed exactly as authored: entity references are
/// resolved (`&amp;` becomes `&`) and multi-byte scripts pass through
/// untouched. Elements the format grew after TS 2.1 (numerus forms and
/// friends, absent from the catalogs this tool targets) are skipped with
/// a logged warning rather than rejected.
pub fn parse_str(text: &str) -> Result<TranslationCatalog, CatalogError> {
    let mut reader = Reader::from_str(text);

    let mut catalog: Option<TranslationCatalog> = None;
    let mut context: Option<ContextDraft> = None;
    let mut message: Option<MessageDraft> = None;
    let mut capture: Option<Capture> = None;
    let mut text_buf = String::new();

    loop {
        let offset = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| CatalogError::Malformed {
            offset,
            message: e.to_string(),
        })?;

        match event {
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}

            Event::Start(ref e) => match e.local_name().as_ref() {
                b"TS" => {
                    if catalog.is_some() {
                        return Err(CatalogError::Malformed {
                            offset,
                            message: "Nested TS element".to_string(),
                        });
                    }
                    catalog = Some(parse_ts_header(e, offset)?);
                }
                _ if catalog.is_none() => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                    return Err(CatalogError::NotTsDocument(name));
                }
                b"context" => {
                    context = Some(ContextDraft::default());
                }
                b"message" => {
                    if context.is_none() {
                        return Err(CatalogError::MessageOutsideContext(offset));
                    }
                    message = Some(MessageDraft::default());
                }
                b"name" if context.is_some() && message.is_none() => {
                    capture = Some(Capture::ContextName);
                    text_buf.clear();
                }
                b"source" if message.is_some() => {
                    capture = Some(Capture::Source);
                    text_buf.clear();
                }
                b"translation" if message.is_some() => {
                    let status = translation_status(e, offset)?;
                    if let Some(draft) = message.as_mut() {
                        draft.status = status;
                    }
                    capture = Some(Capture::Translation);
                    text_buf.clear();
                }
                b"comment" if message.is_some() => {
                    capture = Some(Capture::Comment);
                    text_buf.clear();
                }
                b"translatorcomment" if message.is_some() => {
                    capture = Some(Capture::TranslatorComment);
                    text_buf.clear();
                }
                b"location" if message.is_some() => {
                    let location = parse_location(e, offset)?;
                    if let Some(draft) = message.as_mut() {
                        draft.locations.push(location);
                    }
                }
                other => {
                    warn!(
                        "Skipping unknown element '{}' at byte {}",
                        String::from_utf8_lossy(other),
                        offset
                    );
                }
            },

            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"location" if message.is_some() => {
                    let location = parse_location(e, offset)?;
                    if let Some(draft) = message.as_mut() {
                        draft.locations.push(location);
                    }
                }
                b"translation" if message.is_some() => {
                    let status = translation_status(e, offset)?;
                    if let Some(draft) = message.as_mut() {
                        draft.status = status;
                        draft.translation = Some(String::new());
                    }
                }
                other => {
                    warn!(
                        "Skipping unknown empty element '{}' at byte {}",
                        String::from_utf8_lossy(other),
                        offset
                    );
                }
            },

            Event::Text(ref e) => {
                if capture.is_some() {
                    // Entity references arrive as separate GeneralRef
                    // events; text events carry plain character data.
                    let decoded = e.decode().map_err(|err| CatalogError::Malformed {
                        offset,
                        message: err.to_string(),
                    })?;
                    text_buf.push_str(&decoded);
                }
            }

            Event::CData(ref e) => {
                if capture.is_some() {
                    text_buf.push_str(&String::from_utf8_lossy(e));
                }
            }

            Event::GeneralRef(ref e) => {
                if capture.is_some() {
                    let raw = String::from_utf8_lossy(e).to_string();
                    match resolve_entity(&raw) {
                        Some(resolved) => text_buf.push_str(&resolved),
                        None => {
                            warn!("Unresolvable entity '&{};' at byte {}", raw, offset);
                            text_buf.push('&');
                            text_buf.push_str(&raw);
                            text_buf.push(';');
                        }
                    }
                }
            }

            Event::End(ref e) => match e.local_name().as_ref() {
                b"name" if capture == Some(Capture::ContextName) => {
                    if let Some(draft) = context.as_mut() {
                        draft.name = Some(std::mem::take(&mut text_buf));
                    }
                    capture = None;
                }
                b"source" if capture == Some(Capture::Source) => {
                    if let Some(draft) = message.as_mut() {
                        draft.source = Some(std::mem::take(&mut text_buf));
                    }
                    capture = None;
                }
                b"translation" if capture == Some(Capture::Translation) => {
                    if let Some(draft) = message.as_mut() {
                        draft.translation = Some(std::mem::take(&mut text_buf));
                    }
                    capture = None;
                }
                b"comment" if capture == Some(Capture::Comment) => {
                    if let Some(draft) = message.as_mut() {
                        draft.comment = Some(std::mem::take(&mut text_buf));
                    }
                    capture = None;
                }
                b"translatorcomment" if capture == Some(Capture::TranslatorComment) => {
                    if let Some(draft) = message.as_mut() {
                        draft.translator_comment = Some(std::mem::take(&mut text_buf));
                    }
                    capture = None;
                }
                b"message" => {
                    let draft = message.take().unwrap_or_default();
                    let committed = finish_message(draft, context.as_ref())?;
                    if let Some(ctx) = context.as_mut() {
                        ctx.messages.push(committed);
                    }
                }
                b"context" => {
                    let draft = context.take().unwrap_or_default();
                    let name = draft.name.ok_or(CatalogError::MissingContextName(offset))?;
                    if let Some(cat) = catalog.as_mut() {
                        cat.contexts.push(Context {
                            name,
                            messages: draft.messages,
                        });
                    }
                }
                _ => {}
            },

            Event::Eof => {
                if context.is_some() || message.is_some() || capture.is_some() {
                    return Err(CatalogError::Malformed {
                        offset,
                        message: "Unexpected end of document".to_string(),
                    });
                }
                break;
            }

            #[allow(unreachable_patterns)]
            _ => {}
        }
    }

    catalog.ok_or_else(|| CatalogError::NotTsDocument("(none)".to_string()))
}

/// Build the catalog shell from the `<TS>` element attributes
fn parse_ts_header(e: &BytesStart, offset: u64) -> Result<TranslationCatalog, CatalogError> {
    let mut catalog = TranslationCatalog::new(None);

    for attr in e.attributes() {
        let attr = attr.map_err(|err| CatalogError::Malformed {
            offset,
            message: err.to_string(),
        })?;
        let value = attr
            .unescape_value()
            .map_err(|err| CatalogError::Malformed {
                offset,
                message: err.to_string(),
            })?
            .to_string();

        match attr.key.as_ref() {
            b"version" => catalog.version = value,
            b"language" => catalog.language = Some(value),
            b"sourcelanguage" => catalog.source_language = Some(value),
            _ => {}
        }
    }

    Ok(catalog)
}

/// Read the optional `type` attribute of a `<translation>` element
fn translation_status(e: &BytesStart, offset: u64) -> Result<TranslationStatus, CatalogError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| CatalogError::Malformed {
            offset,
            message: err.to_string(),
        })?;
        if attr.key.as_ref() == b"type" {
            let value = attr
                .unescape_value()
                .map_err(|err| CatalogError::Malformed {
                    offset,
                    message: err.to_string(),
                })?;
            return Ok(TranslationStatus::from_attr(Some(&value)));
        }
    }
    Ok(TranslationStatus::Finished)
}

/// Read the `filename` and `line` attributes of a `<location>` element
fn parse_location(e: &BytesStart, offset: u64) -> Result<Location, CatalogError> {
    let mut filename = String::new();
    let mut line = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|err| CatalogError::Malformed {
            offset,
            message: err.to_string(),
        })?;
        let value = attr
            .unescape_value()
            .map_err(|err| CatalogError::Malformed {
                offset,
                message: err.to_string(),
            })?;

        match attr.key.as_ref() {
            b"filename" => filename = value.to_string(),
            b"line" => match value.parse::<u32>() {
                Ok(n) => line = Some(n),
                Err(_) => warn!("Ignoring non-numeric location line '{}'", value),
            },
            _ => {}
        }
    }

    Ok(Location { filename, line })
}

/// Commit a message draft, enforcing the required source element.
/// A message without any `<translation>` element is treated as unfinished.
fn finish_message(
    draft: MessageDraft,
    context: Option<&ContextDraft>,
) -> Result<Message, CatalogError> {
    let source = draft.source.ok_or_else(|| CatalogError::MissingSource {
        context: context
            .and_then(|c| c.name.clone())
            .unwrap_or_default(),
    })?;

    let (translation, status) = match draft.translation {
        Some(text) => (text, draft.status),
        None => (String::new(), TranslationStatus::Unfinished),
    };

    Ok(Message {
        source,
        translation,
        status,
        comment: draft.comment,
        translator_comment: draft.translator_comment,
        locations: draft.locations,
    })
}

/// Resolve a general entity reference to its replacement text.
/// Handles the predefined XML entities and numeric character references.
fn resolve_entity(raw: &str) -> Option<String> {
    let name = raw.trim_start_matches('&').trim_end_matches(';');

    match name {
        "amp" => return Some("&".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "quot" => return Some("\"".to_string()),
        "apos" => return Some("'".to_string()),
        _ => {}
    }

    let digits = name.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };

    char::from_u32(code).map(|c| c.to_string())
}
