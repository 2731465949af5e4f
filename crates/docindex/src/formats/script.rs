//! Script form of the index
//!
//! Documenter writes the index as a JavaScript file that assigns the JSON
//! document to a global, so the search page can load it with a `<script>` tag:
//!
//! ```text
//! var documenterSearchIndex = {"docs":
//! [{"location":"api/",...},...]
//! }
//! ```

use crate::entry::DocEntry;
use crate::error::{IndexError, Result};
use crate::format::{decode_document, strip_bom, FormatKind, IndexFormat};

/// Name of the global the search page reads.
pub const SCRIPT_VARIABLE: &str = "documenterSearchIndex";

const DECLARATION_KEYWORDS: [&str; 3] = ["var", "let", "const"];

/// The `var documenterSearchIndex = ...` file.
///
/// Output matches the generator byte for byte, so an index read from a
/// generated file and written back is unchanged.
///
/// # Example
///
/// ```
/// use docindex::formats::ScriptFormat;
/// use docindex::IndexFormat;
///
/// let format = ScriptFormat::new();
/// let entries = format.parse("var documenterSearchIndex = {\"docs\":\n[]\n}\n").unwrap();
/// assert!(entries.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptFormat;

impl ScriptFormat {
    /// Create a new script format.
    pub fn new() -> Self {
        Self
    }

    /// Strip the variable declaration and return the assigned JSON text.
    ///
    /// Accepts `var`, `let`, `const` or a bare assignment, and an optional
    /// trailing semicolon. A leading byte order mark is ignored.
    pub fn unwrap_assignment(source: &str) -> Result<&str> {
        let mut rest = strip_bom(source).trim();
        for keyword in DECLARATION_KEYWORDS {
            if let Some(stripped) = rest.strip_prefix(keyword) {
                if stripped.starts_with(char::is_whitespace) {
                    rest = stripped.trim_start();
                    break;
                }
            }
        }

        let (name, value) = rest.split_once('=').ok_or_else(|| {
            IndexError::ScriptWrapper("no assignment to a variable found".to_string())
        })?;

        let name = name.trim();
        if name != SCRIPT_VARIABLE {
            return Err(IndexError::ScriptWrapper(format!(
                "expected `{}`, found `{}`",
                SCRIPT_VARIABLE, name
            )));
        }

        let value = value.trim();
        let value = value.strip_suffix(';').unwrap_or(value).trim_end();
        if value.is_empty() {
            return Err(IndexError::ScriptWrapper(format!(
                "nothing assigned to `{}`",
                SCRIPT_VARIABLE
            )));
        }
        Ok(value)
    }
}

impl IndexFormat for ScriptFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Script
    }

    fn name(&self) -> &str {
        "Documenter script"
    }

    fn file_extension(&self) -> &str {
        "js"
    }

    fn parse(&self, source: &str) -> Result<Vec<DocEntry>> {
        decode_document(Self::unwrap_assignment(source)?)
    }

    fn write(&self, entries: &[DocEntry]) -> Result<String> {
        let docs = serde_json::to_string(entries)?;
        Ok(format!(
            "var {} = {{\"docs\":\n{}\n}}\n",
            SCRIPT_VARIABLE, docs
        ))
    }
}
