//! Text rendering of entries and search hits

use std::fmt;

use crate::entry::DocEntry;
use crate::search::SearchHit;

/// How links to the documentation site are built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Site root prepended to locations; empty leaves them relative
    pub base_url: String,
}

impl RenderOptions {
    /// Create options with relative links.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix links with a site root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Link to an entry. The location is used verbatim.
    ///
    /// ```
    /// use docindex::{Category, DocEntry, RenderOptions};
    ///
    /// let entry = DocEntry::new("#Goals", "Petri.jl", "Goals", "", Category::Section);
    /// assert_eq!(RenderOptions::new().link(&entry), "#Goals");
    /// assert_eq!(
    ///     RenderOptions::with_base_url("https://example.org/docs").link(&entry),
    ///     "https://example.org/docs/#Goals"
    /// );
    /// ```
    pub fn link(&self, entry: &DocEntry) -> String {
        if self.base_url.is_empty() {
            return entry.location.clone();
        }
        let mut link = self.base_url.clone();
        if !link.ends_with('/') {
            link.push('/');
        }
        link.push_str(&entry.location);
        link
    }

    /// One line per hit: score, category, title, page and link, then the snippet.
    pub fn hit(&self, hit: &SearchHit<'_>) -> String {
        let entry = hit.entry;
        let mut out = format!(
            "{:>4}  [{}] {} ({}) {}",
            hit.score,
            entry.category,
            entry.title,
            entry.page,
            self.link(entry)
        );
        if !hit.snippet.is_empty() {
            out.push_str("\n      ");
            out.push_str(&hit.snippet);
        }
        out
    }

    /// One line per entry: position, category, title and link.
    pub fn entry(&self, position: usize, entry: &DocEntry) -> String {
        format!(
            "{:>4}  [{}] {} ({}) {}",
            position,
            entry.category,
            entry.title,
            entry.page,
            self.link(entry)
        )
    }
}

impl fmt::Display for DocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({}) {:?}", self.category, self.title, self.page, self.location)
    }
}

impl fmt::Display for SearchHit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} score={}", self.entry, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Category;

    fn model() -> DocEntry {
        DocEntry::new(
            "api/#Petri.Model",
            "Library Reference",
            "Petri.Model",
            "Model{S,D}",
            Category::Type,
        )
    }

    #[test]
    fn test_link_relative() {
        assert_eq!(RenderOptions::new().link(&model()), "api/#Petri.Model");
    }

    #[test]
    fn test_link_with_trailing_slash_base() {
        let options = RenderOptions::with_base_url("https://example.org/docs/");
        assert_eq!(options.link(&model()), "https://example.org/docs/api/#Petri.Model");
    }

    #[test]
    fn test_link_to_root_page() {
        let root = DocEntry::new("", "Petri.jl", "Petri.jl", "", Category::Page);
        assert_eq!(RenderOptions::new().link(&root), "");
        assert_eq!(
            RenderOptions::with_base_url("https://example.org/docs").link(&root),
            "https://example.org/docs/"
        );
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(
            model().to_string(),
            "[type] Petri.Model (Library Reference) \"api/#Petri.Model\""
        );
    }

    #[test]
    fn test_render_hit() {
        let entry = model();
        let hit = SearchHit {
            entry: &entry,
            position: 4,
            score: 80,
            snippet: "Model{S,D}".to_string(),
        };
        assert_eq!(
            RenderOptions::new().hit(&hit),
            "  80  [type] Petri.Model (Library Reference) api/#Petri.Model\n      Model{S,D}"
        );
        assert_eq!(
            hit.to_string(),
            "[type] Petri.Model (Library Reference) \"api/#Petri.Model\" score=80"
        );
    }

    #[test]
    fn test_render_entry_line() {
        assert_eq!(
            RenderOptions::new().entry(4, &model()),
            "   4  [type] Petri.Model (Library Reference) api/#Petri.Model"
        );
    }
}
