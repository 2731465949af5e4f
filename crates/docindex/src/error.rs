//! Error types for loading and checking search indexes

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationReport;

/// Main error type for docindex operations
#[derive(Error, Debug)]
pub enum IndexError {
    /// Reading or writing an index file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, including entries missing a required field
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level object has no `docs` array
    #[error("index has no `docs` array")]
    MissingDocs,

    /// An entry carries a category tag outside the known set
    #[error("entry {index}: unknown category `{tag}`")]
    UnknownCategory {
        /// Position of the entry in the index
        index: usize,
        /// The tag as found in the data
        tag: String,
    },

    /// Text that looked like the script form could not be unwrapped
    #[error("Script wrapper error: {0}")]
    ScriptWrapper(String),

    /// The index loaded but failed structural validation
    #[error("index failed validation: {0}")]
    Invalid(ValidationReport),
}

impl IndexError {
    /// Build an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for docindex operations
pub type Result<T> = std::result::Result<T, IndexError>;
