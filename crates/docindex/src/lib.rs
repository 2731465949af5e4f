//! # docindex
//!
//! Loader, validator and search matcher for documentation search indexes
//! generated by Documenter (`search_index.js`).
//!
//! A search index is an immutable, ordered snapshot of documentation entries
//! written once at documentation-build time and read by a search widget.
//! This crate reads that snapshot, exposes every entry unchanged, checks its
//! structure, writes it back out without loss and runs keyword searches over it.
//!
//! ## Architecture
//!
//! - **Formats**: Read and write the plain JSON and `var documenterSearchIndex = ...` forms
//! - **Index**: Ordered entries with lookups by location, page and category
//! - **Validation**: Structural checks collected into a report
//! - **Search**: Tokenized, ranked matching over titles and text
//!
//! ## Example
//!
//! ```
//! use docindex::{Category, SearchIndex, SearchOptions};
//!
//! let index = SearchIndex::parse(
//!     r#"{"docs":[{"location":"api/#Petri.Model","page":"Library Reference",
//!        "title":"Petri.Model","text":"Structure for representing the petri net model",
//!        "category":"type"}]}"#,
//! )
//! .unwrap();
//!
//! let hits = index.search("model", &SearchOptions::default());
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].entry.category, Category::Type);
//! assert_eq!(hits[0].entry.location, "api/#Petri.Model");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod error;
pub mod format;
pub mod formats;
pub mod index;
pub mod render;
pub mod search;
pub mod validate;

// Re-export main types
pub use entry::{Category, DocEntry};
pub use error::{IndexError, Result};
pub use format::{FormatKind, IndexFormat};
pub use index::{PageSummary, SearchIndex};
pub use render::RenderOptions;
pub use search::{SearchHit, SearchOptions};
pub use validate::{Rule, ValidationConfig, ValidationReport, Violation};

/// docindex version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
