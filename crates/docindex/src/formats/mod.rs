//! Built-in index formats
//!
//! This module contains the formats docindex reads and writes:
//! - `json`: The bare `{"docs": [...]}` object
//! - `script`: The `var documenterSearchIndex = ...` file written by Documenter

pub mod json;
pub mod script;

pub use json::JsonFormat;
pub use script::{ScriptFormat, SCRIPT_VARIABLE};
