//! Search configuration

use crate::entry::{Category, DocEntry};

/// Default number of hits returned.
pub const DEFAULT_LIMIT: usize = 20;

/// Default number of characters kept either side of a match in snippets.
pub const DEFAULT_SNIPPET_RADIUS: usize = 80;

/// Options controlling which entries a search considers and how many hits
/// it returns.
///
/// # Example
///
/// ```
/// use docindex::{Category, SearchOptions};
///
/// let options = SearchOptions::new()
///     .with_limit(5)
///     .with_category(Category::Method)
///     .with_category(Category::Type);
///
/// assert_eq!(options.limit, 5);
/// assert_eq!(options.categories, vec![Category::Method, Category::Type]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of hits; 0 means no limit
    pub limit: usize,

    /// Only consider these categories; empty means all
    pub categories: Vec<Category>,

    /// Only consider entries of the page with this exact title
    pub page: Option<String>,

    /// Characters kept either side of the match in snippets
    pub snippet_radius: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            categories: Vec::new(),
            page: None,
            snippet_radius: DEFAULT_SNIPPET_RADIUS,
        }
    }
}

impl SearchOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of hits.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Add a category to the filter.
    pub fn with_category(mut self, category: Category) -> Self {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
        self
    }

    /// Restrict the search to one page.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set the snippet radius.
    pub fn with_snippet_radius(mut self, radius: usize) -> Self {
        self.snippet_radius = radius;
        self
    }

    /// Whether an entry passes the category and page filters.
    pub fn accepts(&self, entry: &DocEntry) -> bool {
        let category_ok = self.categories.is_empty() || self.categories.contains(&entry.category);
        let page_ok = self.page.as_deref().map_or(true, |page| entry.page == page);
        category_ok && page_ok
    }

    /// Truncate `hits` to the limit.
    pub(crate) fn apply_limit<T>(&self, hits: &mut Vec<T>) {
        if self.limit > 0 {
            hits.truncate(self.limit);
        }
    }
}
