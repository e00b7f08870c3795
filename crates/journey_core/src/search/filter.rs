//! Case-insensitive substring filter over note content.
//!
//! # Invariants
//! - A blank query matches every note.
//! - Results keep the input order; there is no ranking.
//! - A non-blank query is matched as given, without trimming.

use crate::model::note::{is_blank, Note};

/// Returns whether `query` should be treated as "no filter".
pub fn is_blank_query(query: &str) -> bool {
    is_blank(query)
}

/// Case-insensitive substring test.
///
/// Both sides are folded with Unicode lowercase mapping before comparison.
pub fn matches_query(content: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    content.to_lowercase().contains(&query.to_lowercase())
}

/// Filters `notes` by `query`, preserving order.
///
/// Returns all notes unchanged for blank queries.
pub fn filter_notes(notes: Vec<Note>, query: &str) -> Vec<Note> {
    if is_blank_query(query) {
        return notes;
    }

    notes
        .into_iter()
        .filter(|note| matches_query(&note.content, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_notes, is_blank_query, matches_query};
    use crate::model::note::Note;

    fn notes(contents: &[&str]) -> Vec<Note> {
        contents
            .iter()
            .map(|content| Note::new(*content).unwrap())
            .collect()
    }

    #[test]
    fn blank_query_detection() {
        assert!(is_blank_query(""));
        assert!(is_blank_query(" \t"));
        assert!(!is_blank_query("a"));
    }

    #[test]
    fn matches_ignore_case_in_both_directions() {
        assert!(matches_query("Hello World", "hello"));
        assert!(matches_query("hello world", "WORLD"));
        assert!(matches_query("Grüße", "GRÜ"));
        assert!(!matches_query("Hello", "help"));
    }

    #[test]
    fn non_blank_query_is_not_trimmed() {
        let filtered = filter_notes(notes(&["ab", "a b"]), " b");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content, "a b");
    }

    #[test]
    fn filter_preserves_input_order() {
        let filtered = filter_notes(notes(&["x1", "y", "x2", "x3"]), "X");
        let contents: Vec<&str> = filtered.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["x1", "x2", "x3"]);
    }

    #[test]
    fn filter_keeps_exactly_the_matching_notes() {
        let input = notes(&["Straße", "STRASSE", "strand", "Weg"]);
        for query in ["str", "STR", "ße", "weg", "x"] {
            let expected: Vec<_> = input
                .iter()
                .filter(|note| matches_query(&note.content, query))
                .cloned()
                .collect();
            assert_eq!(filter_notes(input.clone(), query), expected, "query `{query}`");
        }
        assert_eq!(filter_notes(input.clone(), "STR").len(), 3);
    }

    #[test]
    fn blank_query_returns_input_unchanged() {
        let input = notes(&["a", "b"]);
        assert_eq!(filter_notes(input.clone(), "   "), input);
    }
}
