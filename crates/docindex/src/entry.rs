//! Documentation entries and their category tags

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of documentation unit an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A paragraph of a whole page
    Page,

    /// A heading within a page
    Section,

    /// A module docstring
    Module,

    /// A type docstring
    Type,

    /// A method or function docstring
    Method,
}

impl Category {
    /// Every category, in the order the generator tends to emit them.
    pub const ALL: [Category; 5] = [
        Category::Page,
        Category::Section,
        Category::Module,
        Category::Type,
        Category::Method,
    ];

    /// The tag as written in the index.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
            Category::Module => "module",
            Category::Type => "type",
            Category::Method => "method",
        }
    }

    /// Look up a category by its tag. Tags are matched exactly.
    pub fn from_tag(tag: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == tag)
    }

    /// Whether this entry documents an API symbol rather than prose.
    pub fn is_api(self) -> bool {
        matches!(self, Category::Module | Category::Type | Category::Method)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of the search index.
///
/// Fields are declared in the order the generator writes them, so
/// serializing an entry reproduces the original key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocEntry {
    /// URL fragment of the anchor, relative to the documentation root.
    /// External links depend on this exact value.
    pub location: String,

    /// Title of the containing page
    pub page: String,

    /// Display title: an API symbol or a section heading
    pub title: String,

    /// Prose excerpt or docstring body used for matching
    pub text: String,

    /// What kind of unit this is
    pub category: Category,
}

impl DocEntry {
    /// Create a new entry.
    pub fn new(
        location: impl Into<String>,
        page: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            location: location.into(),
            page: page.into(),
            title: title.into(),
            text: text.into(),
            category,
        }
    }

    /// Whether the location points at an anchor inside a page.
    pub fn is_anchored(&self) -> bool {
        self.location.contains('#')
    }

    /// The page part of the location (everything before `#`).
    ///
    /// The root page is the empty string.
    pub fn page_path(&self) -> &str {
        match self.location.split_once('#') {
            Some((path, _)) => path,
            None => &self.location,
        }
    }

    /// The anchor part of the location, if any.
    pub fn anchor(&self) -> Option<&str> {
        self.location.split_once('#').map(|(_, anchor)| anchor)
    }

    /// Unqualified symbol name for API entries.
    ///
    /// `Petri.solve` gives `solve`; prose categories give `None`.
    pub fn symbol_name(&self) -> Option<&str> {
        if !self.category.is_api() {
            return None;
        }
        self.title.rsplit('.').next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_entry() -> DocEntry {
        DocEntry::new(
            "api/#Petri.Model",
            "Library Reference",
            "Petri.Model",
            "Structure for representing the petri net model",
            Category::Type,
        )
    }

    #[test]
    fn test_category_tags_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_tag("Page"), None);
        assert_eq!(Category::from_tag("macro"), None);
    }

    #[test]
    fn test_category_is_api() {
        assert!(!Category::Page.is_api());
        assert!(!Category::Section.is_api());
        assert!(Category::Module.is_api());
        assert!(Category::Type.is_api());
        assert!(Category::Method.is_api());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Method).unwrap();
        assert_eq!(json, "\"method\"");
    }

    #[test]
    fn test_entry_location_parts() {
        let entry = model_entry();
        assert!(entry.is_anchored());
        assert_eq!(entry.page_path(), "api/");
        assert_eq!(entry.anchor(), Some("Petri.Model"));
    }

    #[test]
    fn test_root_page_location() {
        let entry = DocEntry::new("", "Petri.jl", "Petri.jl", "CurrentModule = Petri", Category::Page);
        assert!(!entry.is_anchored());
        assert_eq!(entry.page_path(), "");
        assert_eq!(entry.anchor(), None);
    }

    #[test]
    fn test_symbol_name() {
        assert_eq!(model_entry().symbol_name(), Some("Model"));

        let section = DocEntry::new("#Goals", "Petri.jl", "Goals", "", Category::Section);
        assert_eq!(section.symbol_name(), None);
    }

    #[test]
    fn test_entry_serializes_in_generator_order() {
        let json = serde_json::to_string(&model_entry()).unwrap();
        assert_eq!(
            json,
            r#"{"location":"api/#Petri.Model","page":"Library Reference","title":"Petri.Model","text":"Structure for representing the petri net model","category":"type"}"#
        );
    }
}
