//! Ranked keyword search over titles and text
//!
//! Where the match happens matters more than how often: any title match
//! outranks any text match, and an exact title outranks a partial one.
//!
//! | match                                         | score |
//! |-----------------------------------------------|-------|
//! | title equals the query                        | 100   |
//! | unqualified API symbol equals the query       | 80    |
//! | title contains the query                      | 50    |
//! | per query token found among title tokens     | +10   |
//! | text contains the query                       | +5    |
//! | per query token found among text tokens      | +1    |
//!
//! An entry matches when every query token appears in its title or text, or
//! when the whole query appears in either. Hits are ordered by score, then
//! by position in the index.

mod options;
mod snippet;
mod tokenize;

pub use options::{SearchOptions, DEFAULT_LIMIT, DEFAULT_SNIPPET_RADIUS};
pub use snippet::snippet;
pub use tokenize::{token_set, tokenize, Query};

use crate::entry::DocEntry;

/// Score for a title equal to the query.
pub const EXACT_TITLE: u32 = 100;
/// Score for an API symbol whose unqualified name equals the query.
pub const EXACT_SYMBOL: u32 = 80;
/// Score for a title containing the query.
pub const TITLE_PHRASE: u32 = 50;
/// Score per query token among the title's tokens.
pub const TITLE_TOKEN: u32 = 10;
/// Score for text containing the query.
pub const TEXT_PHRASE: u32 = 5;
/// Score per query token among the text's tokens.
pub const TEXT_TOKEN: u32 = 1;

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// The matching entry
    pub entry: &'a DocEntry,

    /// Position of the entry in the index
    pub position: usize,

    /// Relevance; higher is better
    pub score: u32,

    /// One-line excerpt of the text around the match
    pub snippet: String,
}

/// Score an entry against a query; `None` when it does not match.
pub fn score(entry: &DocEntry, query: &Query) -> Option<u32> {
    if query.is_empty() {
        return None;
    }

    let title = entry.title.to_lowercase();
    let text = entry.text.to_lowercase();
    let title_tokens = token_set(&entry.title);
    let text_tokens = token_set(&entry.text);

    let title_phrase = title.contains(&query.phrase);
    let text_phrase = text.contains(&query.phrase);
    let all_tokens = !query.tokens.is_empty()
        && query
            .tokens
            .iter()
            .all(|t| title_tokens.contains(t) || text_tokens.contains(t));

    if !(all_tokens || title_phrase || text_phrase) {
        return None;
    }

    let symbol_exact = entry
        .symbol_name()
        .is_some_and(|name| name.to_lowercase() == query.phrase);

    let mut score = if title == query.phrase {
        EXACT_TITLE
    } else if symbol_exact {
        EXACT_SYMBOL
    } else if title_phrase {
        TITLE_PHRASE
    } else {
        0
    };

    for token in &query.tokens {
        if title_tokens.contains(token) {
            score += TITLE_TOKEN;
        }
        if text_tokens.contains(token) {
            score += TEXT_TOKEN;
        }
    }
    if text_phrase {
        score += TEXT_PHRASE;
    }

    Some(score)
}

/// Search `entries` for `query`.
///
/// An empty or blank query returns no hits.
pub fn search<'a>(entries: &'a [DocEntry], query: &str, options: &SearchOptions) -> Vec<SearchHit<'a>> {
    let query = Query::new(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, u32)> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| options.accepts(entry))
        .filter_map(|(position, entry)| score(entry, &query).map(|s| (position, s)))
        .collect();

    // Stable sort keeps index order among equal scores.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let matched = ranked.len();
    options.apply_limit(&mut ranked);

    tracing::debug!(query = %query.phrase, matched, returned = ranked.len(), "search");

    ranked
        .into_iter()
        .map(|(position, score)| {
            let entry = &entries[position];
            SearchHit {
                entry,
                position,
                score,
                snippet: snippet(&entry.text, &query, options.snippet_radius),
            }
        })
        .collect()
}
