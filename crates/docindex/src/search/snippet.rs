//! Excerpts of entry text around a match

use super::tokenize::Query;

const ELLIPSIS: &str = "...";

/// Cut a one-line excerpt of `text` around the first match of `query`.
///
/// The whole phrase is looked for first, then each token in turn. Without a
/// match the excerpt starts at the beginning of the text. Runs of whitespace
/// are collapsed to a single space and `...` marks a cut at either end.
pub fn snippet(text: &str, query: &Query, radius: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let (at, len) = std::iter::once(&query.phrase)
        .chain(query.tokens.iter())
        .find_map(|needle| {
            let needle: Vec<char> = needle.chars().collect();
            find_ignore_case(&chars, &needle).map(|at| (at, needle.len()))
        })
        .unwrap_or((0, 0));

    let start = at.saturating_sub(radius);
    let end = at.saturating_add(len).saturating_add(radius).min(chars.len());

    let body = collapse_whitespace(&chars[start..end]);
    let mut out = String::with_capacity(body.len() + 2 * ELLIPSIS.len());
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(body.trim());
    if end < chars.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Char position of the first case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| {
        haystack[i..i + needle.len()]
            .iter()
            .zip(needle)
            .all(|(h, n)| h.to_lowercase().eq(n.to_lowercase()))
    })
}

fn collapse_whitespace(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut in_space = false;
    for &c in chars {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(snippet("", &Query::new("petri"), 10), "");
    }

    #[test]
    fn test_short_text_untouched() {
        let text = "solve(p::Problem)\n\nEvaluate petri net problem";
        assert_eq!(
            snippet(text, &Query::new("petri"), 80),
            "solve(p::Problem) Evaluate petri net problem"
        );
    }

    #[test]
    fn test_cut_around_match() {
        let text = "aaaaaaaaaa Petri bbbbbbbbbb";
        assert_eq!(snippet(text, &Query::new("petri"), 3), "...aa Petri bb...");
    }

    #[test]
    fn test_falls_back_to_token() {
        let text = "The SIR model represents the epidemiological dynamics";
        assert_eq!(
            snippet(text, &Query::new("recovery sir"), 4),
            "The SIR mod..."
        );
    }

    #[test]
    fn test_no_match_starts_at_beginning() {
        assert_eq!(snippet("abcdefgh", &Query::new("zzz"), 3), "abc...");
    }

    #[test]
    fn test_huge_radius_keeps_whole_text() {
        let text = "aaaa Petri bbbb";
        assert_eq!(snippet(text, &Query::new("petri"), usize::MAX), text);
    }

    #[test]
    fn test_multibyte_text() {
        let text = "ééé Petri ééé";
        assert_eq!(snippet(text, &Query::new("petri"), 2), "...é Petri é...");
    }
}
