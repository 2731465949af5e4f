//! On-disk forms of a search index
//!
//! This module defines the `IndexFormat` trait implemented by every form the
//! index can be read from or written to. Two forms exist in the wild:
//!
//! ```text
//! {"docs":[...]}                                  plain JSON
//! var documenterSearchIndex = {"docs":\n[...]\n}  script loaded by the search page
//! ```
//!
//! Both carry the same document, an object with a single `docs` array. The
//! shared decoding lives here so that every format reports missing fields and
//! unknown categories the same way.

use serde::{Deserialize, Serialize};

use crate::entry::{Category, DocEntry};
use crate::error::{IndexError, Result};
use crate::formats::{JsonFormat, ScriptFormat};

// ═══════════════════════════════════════════════════════════════════════
// FORMAT KINDS
// ═══════════════════════════════════════════════════════════════════════

/// The forms an index can be read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Compact JSON object
    Json,

    /// Indented JSON object, for reading by humans
    PrettyJson,

    /// JSON assigned to `documenterSearchIndex`, as the generator writes it
    Script,
}

impl FormatKind {
    /// Guess the form of `source` from its first meaningful character.
    pub fn detect(source: &str) -> FormatKind {
        if strip_bom(source).trim_start().starts_with('{') {
            FormatKind::Json
        } else {
            FormatKind::Script
        }
    }

    /// The format implementation for this kind.
    pub fn format(self) -> Box<dyn IndexFormat> {
        match self {
            FormatKind::Json => Box::new(JsonFormat::compact()),
            FormatKind::PrettyJson => Box::new(JsonFormat::pretty()),
            FormatKind::Script => Box::new(ScriptFormat::new()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FORMAT TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// A readable and writable form of the search index.
///
/// Implementations only deal with framing. Entry decoding goes through
/// [`decode_document`] so that errors look the same whatever the framing.
pub trait IndexFormat: Send + Sync {
    /// Which kind of format this is.
    fn kind(&self) -> FormatKind;

    /// Human-readable name, e.g. "JSON".
    fn name(&self) -> &str;

    /// Usual file extension, without the dot.
    fn file_extension(&self) -> &str;

    /// Decode entries from `source`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns an error if the framing is wrong, the JSON is malformed, an
    /// entry lacks one of its five fields or carries an unknown category.
    fn parse(&self, source: &str) -> Result<Vec<DocEntry>>;

    /// Encode entries in this form.
    fn write(&self, entries: &[DocEntry]) -> Result<String>;
}

// ═══════════════════════════════════════════════════════════════════════
// SHARED DOCUMENT CODEC
// ═══════════════════════════════════════════════════════════════════════

const BOM: char = '\u{feff}';

/// Drop a leading UTF-8 byte order mark, which `read_to_string` keeps.
pub(crate) fn strip_bom(source: &str) -> &str {
    source.strip_prefix(BOM).unwrap_or(source)
}

#[derive(Deserialize)]
struct RawDocument {
    docs: Option<Vec<RawEntry>>,
}

// Category stays a string here so an unknown tag can be reported with the
// position of its entry.
#[derive(Deserialize)]
struct RawEntry {
    location: String,
    page: String,
    title: String,
    text: String,
    category: String,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    docs: &'a [DocEntry],
}

/// Decode a `{"docs": [...]}` JSON object into entries.
pub fn decode_document(json: &str) -> Result<Vec<DocEntry>> {
    let raw: RawDocument = serde_json::from_str(strip_bom(json))?;
    let docs = raw.docs.ok_or(IndexError::MissingDocs)?;

    docs.into_iter()
        .enumerate()
        .map(|(index, raw)| -> Result<DocEntry> {
            let category = Category::from_tag(&raw.category).ok_or_else(|| {
                IndexError::UnknownCategory {
                    index,
                    tag: raw.category.clone(),
                }
            })?;
            Ok(DocEntry {
                location: raw.location,
                page: raw.page,
                title: raw.title,
                text: raw.text,
                category,
            })
        })
        .collect()
}

/// Encode entries as a `{"docs": [...]}` JSON object.
pub fn encode_document(entries: &[DocEntry], pretty: bool) -> Result<String> {
    let document = DocumentRef { docs: entries };
    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}
