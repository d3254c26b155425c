use std::fmt::Write;
use quick_xml::escape::{escape, partial_escape};

use super::model::{Message, TranslationCatalog};

// @module: Serialization to the lupdate TS file layout

/// Serialize a catalog to TS document text.
///
/// The layout mirrors what lupdate emits: XML declaration, TS doctype,
/// `<context>` flush-left with 4-space child indentation, and entity
/// escaping limited to `&`, `<`, `>` in text payloads. Parsing a file in
/// that layout and serializing it again reproduces the input bytes.
pub fn serialize(catalog: &TranslationCatalog) -> String {
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS version=\"");
    out.push_str(&escape(catalog.version.as_str()));
    out.push('"');
    if let Some(language) = &catalog.language {
        let _ = write!(out, " language=\"{}\"", escape(language.as_str()));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape(source_language.as_str()));
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        out.push_str("<context>\n");
        let _ = writeln!(out, "    <name>{}</name>", partial_escape(context.name.as_str()));
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str("    <message>\n");

    for location in &message.locations {
        out.push_str("        <location filename=\"");
        out.push_str(&escape(location.filename.as_str()));
        out.push('"');
        if let Some(line) = location.line {
            let _ = write!(out, " line=\"{}\"", line);
        }
        out.push_str("/>\n");
    }

    let _ = writeln!(
        out,
        "        <source>{}</source>",
        partial_escape(message.source.as_str())
    );

    if let Some(comment) = &message.comment {
        let _ = writeln!(
            out,
            "        <comment>{}</comment>",
            partial_escape(comment.as_str())
        );
    }

    if let Some(translator_comment) = &message.translator_comment {
        let _ = writeln!(
            out,
            "        <translatorcomment>{}</translatorcomment>",
            partial_escape(translator_comment.as_str())
        );
    }

    out.push_str("        <translation");
    if let Some(attr) = message.status.as_attr() {
        let _ = write!(out, " type=\"{}\"", attr);
    }
    out.push('>');
    out.push_str(&partial_escape(message.translation.as_str()));
    out.push_str("</translation>\n");

    out.push_str("    </message>\n");
}
