//! Black-box exercise of the end-to-end Tab-autocomplete scenario from the
//! public API only.

use termline_matcher::best_match;

#[test]
fn two_rounds_of_tab_on_an_ambiguous_prefix() {
    let candidates = ["help", "hello", "exit"];

    // First Tab: "he" has two matches, so the buffer advances to their LCP.
    let (first, resolved) = best_match("he", &candidates);
    assert_eq!(first, "hel");
    assert!(!resolved);

    // Second Tab on the unchanged "hel" still doesn't resolve uniquely —
    // the caller is expected to print the suggestion list instead, the
    // buffer itself never moves past the shared prefix.
    let (second, resolved) = best_match(&first, &candidates);
    assert_eq!(second, "hel");
    assert!(!resolved);
}

#[test]
fn tab_with_no_candidates_leaves_buffer_unchanged() {
    let (matched, resolved) = best_match("zzz", &["help", "hello", "exit"]);
    assert_eq!(matched, "zzz");
    assert!(!resolved);
}
