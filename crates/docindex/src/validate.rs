//! Structural validation of a search index
//!
//! Checks run over the whole index and collect every violation rather than
//! stopping at the first one. Category tags are checked earlier, while
//! decoding, since an unknown tag cannot be represented as a [`Category`].
//!
//! Documenter emits one `page` entry per paragraph, all sharing the page's
//! location, and the root page's location is the empty string. The default
//! configuration accepts both; [`ValidationConfig::strict`] does not.

use std::collections::HashMap;
use std::fmt;

use crate::entry::{Category, DocEntry};

/// Switches for the rules that real generator output bends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// `page` entries may share a location with each other
    pub allow_shared_page_locations: bool,

    /// `page` entries may have an empty location (the documentation root)
    pub allow_empty_root_location: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allow_shared_page_locations: true,
            allow_empty_root_location: true,
        }
    }
}

impl ValidationConfig {
    /// Create the default configuration, which accepts generator output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every location non-empty and unique, whatever the category.
    pub fn strict() -> Self {
        Self {
            allow_shared_page_locations: false,
            allow_empty_root_location: false,
        }
    }
}

/// The rule an entry broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `location` is empty
    EmptyLocation,

    /// `page` is empty
    EmptyPage,

    /// `title` is empty
    EmptyTitle,

    /// `location` was already used by the entry at `first`
    DuplicateLocation {
        /// Position of the earlier entry
        first: usize,
    },
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::EmptyLocation => write!(f, "empty location"),
            Rule::EmptyPage => write!(f, "empty page"),
            Rule::EmptyTitle => write!(f, "empty title"),
            Rule::DuplicateLocation { first } => {
                write!(f, "location already used by entry {}", first)
            }
        }
    }
}

/// One broken rule, tied to the entry that broke it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Position of the entry
    pub index: usize,

    /// The entry's location, as found
    pub location: String,

    /// What was wrong
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {} ({:?}): {}", self.index, self.location, self.rule)
    }
}

/// Outcome of validating an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    checked: usize,
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Whether no rule was broken.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of entries checked.
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Violations in entry order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations of rules matching `pred`.
    pub fn matching(&self, pred: impl Fn(&Rule) -> bool) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| pred(&v.rule))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.violations.len() == 1 { "" } else { "s" };
        write!(
            f,
            "{} violation{} in {} entries",
            self.violations.len(),
            plural,
            self.checked
        )
    }
}

/// Check every entry against the rules enabled by `config`.
pub fn validate(entries: &[DocEntry], config: &ValidationConfig) -> ValidationReport {
    let mut violations = Vec::new();
    let mut first_use: HashMap<&str, usize> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let is_page = entry.category == Category::Page;
        let mut report = |rule| {
            violations.push(Violation {
                index,
                location: entry.location.clone(),
                rule,
            })
        };

        if entry.location.is_empty() && !(is_page && config.allow_empty_root_location) {
            report(Rule::EmptyLocation);
        }
        if entry.page.is_empty() {
            report(Rule::EmptyPage);
        }
        if entry.title.is_empty() {
            report(Rule::EmptyTitle);
        }

        if is_page && config.allow_shared_page_locations {
            continue;
        }
        // An empty location is either allowed or already reported.
        if entry.location.is_empty() {
            continue;
        }
        match first_use.get(entry.location.as_str()) {
            Some(&first) => report(Rule::DuplicateLocation { first }),
            None => {
                first_use.insert(entry.location.as_str(), index);
            }
        }
    }

    ValidationReport {
        checked: entries.len(),
        violations,
    }
}
