//! Query and field tokenization

use std::collections::HashSet;

/// Split text into lowercase word tokens.
///
/// Anything other than alphanumerics and `_` separates tokens, so dotted
/// names like `Petri.solve` yield `petri` and `solve`.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Distinct tokens of a field.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).collect()
}

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The whole query, trimmed and lowercased
    pub phrase: String,

    /// Distinct tokens in order of first appearance
    pub tokens: Vec<String>,
}

impl Query {
    /// Normalize a user-entered query.
    pub fn new(raw: &str) -> Self {
        let phrase = raw.trim().to_lowercase();
        let mut tokens: Vec<String> = Vec::new();
        for token in tokenize(&phrase) {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        Self { phrase, tokens }
    }

    /// Whether there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }
}
