//! Plain JSON form of the index

use crate::entry::DocEntry;
use crate::error::Result;
use crate::format::{decode_document, encode_document, FormatKind, IndexFormat};

/// The bare `{"docs": [...]}` object.
///
/// # Example
///
/// ```
/// use docindex::formats::JsonFormat;
/// use docindex::IndexFormat;
///
/// let format = JsonFormat::compact();
/// let entries = format.parse(r#"{"docs":[]}"#).unwrap();
/// assert!(entries.is_empty());
/// assert_eq!(format.write(&entries).unwrap(), r#"{"docs":[]}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    /// Compact output, no whitespace.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl IndexFormat for JsonFormat {
    fn kind(&self) -> FormatKind {
        if self.pretty {
            FormatKind::PrettyJson
        } else {
            FormatKind::Json
        }
    }

    fn name(&self) -> &str {
        "JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn parse(&self, source: &str) -> Result<Vec<DocEntry>> {
        decode_document(source)
    }

    fn write(&self, entries: &[DocEntry]) -> Result<String> {
        encode_document(entries, self.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Category;

    #[test]
    fn test_pretty_output_parses_back() {
        let entries = vec![
            DocEntry::new("api/", "Library Reference", "Library Reference", "Modules = [Petri]", Category::Page),
            DocEntry::new("api/#Petri.Petri", "Library Reference", "Petri.Petri", "Petri", Category::Module),
        ];
        let format = JsonFormat::pretty();
        let text = format.write(&entries).unwrap();
        assert!(text.contains('\n'));
        assert_eq!(format.parse(&text).unwrap(), entries);
    }

    #[test]
    fn test_kind_follows_pretty_flag() {
        assert_eq!(JsonFormat::compact().kind(), FormatKind::Json);
        assert_eq!(JsonFormat::pretty().kind(), FormatKind::PrettyJson);
        assert_eq!(JsonFormat::default().file_extension(), "json");
    }
}
