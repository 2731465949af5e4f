//! The loaded search index

use std::path::Path;

use indexmap::IndexMap;

use crate::entry::{Category, DocEntry};
use crate::error::{IndexError, Result};
use crate::format::{FormatKind, IndexFormat};
use crate::formats::{JsonFormat, ScriptFormat};
use crate::search::{self, SearchHit, SearchOptions};
use crate::validate::{self, ValidationConfig, ValidationReport};

/// A page of the documentation, as seen through its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    /// Page title
    pub title: String,

    /// Location of the page itself (without anchor)
    pub path: String,

    /// Number of entries belonging to the page
    pub entry_count: usize,
}

/// An immutable, ordered snapshot of documentation entries.
///
/// Entry order is the order the generator wrote them and is kept by every
/// operation. There is no way to change a loaded index; regenerate it and
/// load the new one instead.
///
/// # Example
///
/// ```
/// use docindex::{Category, DocEntry, SearchIndex};
///
/// let index = SearchIndex::from_entries(vec![
///     DocEntry::new("usage/#Basic-Usage", "Basic Usage", "Basic Usage", "", Category::Section),
///     DocEntry::new("usage/", "Basic Usage", "Basic Usage", "using Petri", Category::Page),
///     DocEntry::new("usage/", "Basic Usage", "Basic Usage", "using Plots", Category::Page),
/// ]);
///
/// assert_eq!(index.len(), 3);
/// assert_eq!(index.by_location("usage/").count(), 2);
/// assert_eq!(index.pages().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
    /// Entries in generation order
    entries: Vec<DocEntry>,

    /// Location -> positions of entries sharing it, in first-seen order
    locations: IndexMap<String, Vec<usize>>,
}

impl SearchIndex {
    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Build an index from entries, keeping their order.
    pub fn from_entries(entries: Vec<DocEntry>) -> Self {
        let mut locations: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (position, entry) in entries.iter().enumerate() {
            locations
                .entry(entry.location.clone())
                .or_default()
                .push(position);
        }
        Self { entries, locations }
    }

    /// Parse the plain `{"docs": [...]}` JSON form.
    pub fn from_json_str(source: &str) -> Result<Self> {
        Self::parse_as(source, &JsonFormat::compact())
    }

    /// Parse the `var documenterSearchIndex = ...` script form.
    pub fn from_script_str(source: &str) -> Result<Self> {
        Self::parse_as(source, &ScriptFormat::new())
    }

    /// Parse either form, detecting which one `source` is in.
    pub fn parse(source: &str) -> Result<Self> {
        let kind = FormatKind::detect(source);
        Self::parse_as(source, kind.format().as_ref())
    }

    /// Parse with an explicit format.
    pub fn parse_as(source: &str, format: &dyn IndexFormat) -> Result<Self> {
        let entries = format.parse(source)?;
        tracing::debug!(format = format.name(), entries = entries.len(), "parsed search index");
        Ok(Self::from_entries(entries))
    }

    /// Read and parse an index file in either form.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| IndexError::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "read search index");
        Self::parse(&source)
    }

    /// Keep the index only if it passes validation.
    ///
    /// Every violation is logged as a warning before the error is returned.
    pub fn validated(self, config: &ValidationConfig) -> Result<Self> {
        let report = self.validate(config);
        if report.is_valid() {
            return Ok(self);
        }
        for violation in report.violations() {
            tracing::warn!("{}", violation);
        }
        Err(IndexError::Invalid(report))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Serialization
    // ═══════════════════════════════════════════════════════════════════

    /// Serialize in the given form.
    pub fn write(&self, kind: FormatKind) -> Result<String> {
        kind.format().write(&self.entries)
    }

    /// Compact JSON object.
    pub fn to_json_string(&self) -> Result<String> {
        self.write(FormatKind::Json)
    }

    /// Indented JSON object.
    pub fn to_json_pretty(&self) -> Result<String> {
        self.write(FormatKind::PrettyJson)
    }

    /// Script form, identical to what the generator writes.
    pub fn to_script_string(&self) -> Result<String> {
        self.write(FormatKind::Script)
    }

    /// Serialize and write to a file.
    pub fn save(&self, path: impl AsRef<Path>, kind: FormatKind) -> Result<()> {
        let path = path.as_ref();
        let text = self.write(kind)?;
        std::fs::write(path, text).map_err(|e| IndexError::io(path, e))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Access
    // ═══════════════════════════════════════════════════════════════════

    /// All entries in order.
    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a position.
    pub fn get(&self, position: usize) -> Option<&DocEntry> {
        self.entries.get(position)
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocEntry> {
        self.entries.iter()
    }

    /// Entries at exactly this location, in order.
    pub fn by_location<'a>(&'a self, location: &str) -> impl Iterator<Item = &'a DocEntry> + 'a {
        self.locations
            .get(location)
            .into_iter()
            .flatten()
            .map(move |&position| &self.entries[position])
    }

    /// Positions of entries at this location.
    pub fn positions_of(&self, location: &str) -> &[usize] {
        self.locations
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct locations in first-seen order, with how many entries use each.
    pub fn locations(&self) -> impl Iterator<Item = (&str, usize)> {
        self.locations
            .iter()
            .map(|(location, positions)| (location.as_str(), positions.len()))
    }

    /// Entries of one category, in order.
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &DocEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Entry count per category, for every category.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.of_category(category).count()))
            .collect()
    }

    /// Pages in first-seen order with their entry counts.
    pub fn pages(&self) -> Vec<PageSummary> {
        let mut pages: IndexMap<&str, PageSummary> = IndexMap::new();
        for entry in &self.entries {
            pages
                .entry(entry.page.as_str())
                .or_insert_with(|| PageSummary {
                    title: entry.page.clone(),
                    path: entry.page_path().to_string(),
                    entry_count: 0,
                })
                .entry_count += 1;
        }
        pages.into_values().collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Checking and searching
    // ═══════════════════════════════════════════════════════════════════

    /// Check the structure of the index.
    pub fn validate(&self, config: &ValidationConfig) -> ValidationReport {
        validate::validate(&self.entries, config)
    }

    /// Run a ranked search over titles and text.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'_>> {
        search::search(&self.entries, query, options)
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a DocEntry;
    type IntoIter = std::slice::Iter<'a, DocEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
