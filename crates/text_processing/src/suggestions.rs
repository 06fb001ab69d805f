//! Suggestion chip matching

use crate::normalize::normalize_answer;

/// Catalog label the reply names exactly, ignoring case and trailing punctuation
pub fn match_suggestion<'a>(text: &str, labels: &'a [String]) -> Option<&'a str> {
    let normalized = normalize_answer(text);
    if normalized.is_empty() {
        return None;
    }

    labels
        .iter()
        .find(|label| normalize_answer(label) == normalized)
        .map(|label| label.as_str())
}
