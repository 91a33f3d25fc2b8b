//! Prefix matching shared by command resolution and Tab-autocomplete.
//!
//! A single `best_match` call answers both questions: "does this token
//! resolve to exactly one candidate?" and, if not, "what's the longest
//! common prefix a caller could extend the buffer to?"

/// Matches `token` against `candidates`, returning the resolved or
/// partially-resolved string and whether the match is unique.
///
/// - `token` empty → `("", false)`.
/// - No candidate starts with `token` → `(token, false)`, unchanged.
/// - Exactly one candidate starts with `token` → `(candidate, true)`.
/// - More than one → `(longest_common_prefix, false)`.
pub fn best_match(token: &str, candidates: &[&str]) -> (String, bool) {
    if token.is_empty() {
        return (String::new(), false);
    }

    let filtered: Vec<&str> = candidates.iter().copied().filter(|c| c.starts_with(token)).collect();

    match filtered.as_slice() {
        [] => (token.to_string(), false),
        [single] => (single.to_string(), true),
        many => (longest_common_prefix(many), false),
    }
}

/// Longest common prefix of a non-empty set of strings, extended one byte
/// at a time from the first candidate until some candidate disagrees.
///
/// Operates on bytes, not chars, matching the input-is-bytes stance of the
/// rest of the editor; a prefix that lands mid multi-byte sequence is
/// rendered lossily rather than rejected.
fn longest_common_prefix(strings: &[&str]) -> String {
    let model = match strings.first() {
        Some(s) => s.as_bytes(),
        None => return String::new(),
    };

    let mut prefix_len = 0;
    while prefix_len < model.len() {
        let candidate = &model[..prefix_len + 1];
        if !strings.iter().all(|s| s.as_bytes().starts_with(candidate)) {
            break;
        }
        prefix_len += 1;
    }
    String::from_utf8_lossy(&model[..prefix_len]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_never_resolves() {
        assert_eq!(best_match("", &["help", "hello"]), ("".to_string(), false));
    }

    #[test]
    fn no_candidates_returns_token_unchanged() {
        assert_eq!(best_match("zz", &["help", "hello"]), ("zz".to_string(), false));
    }

    #[test]
    fn unique_match_is_resolved() {
        assert_eq!(best_match("hel", &["help", "exit"]), ("help".to_string(), true));
    }

    #[test]
    fn multiple_matches_yield_longest_common_prefix() {
        assert_eq!(best_match("he", &["help", "hello", "exit"]), ("hel".to_string(), false));
    }

    #[test]
    fn scenario_one_second_tab_suggestion_list_is_unaffected_by_match() {
        // Input "he" + Tab -> "hel" (LCP, not resolved); matches spec.md scenario 1.
        let (matched, resolved) = best_match("he", &["help", "hello", "exit"]);
        assert_eq!(matched, "hel");
        assert!(!resolved);
    }
}
