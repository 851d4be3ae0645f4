//! Word counting.

/// Count the words in `text`.
///
/// A word is a maximal run of non-whitespace runes. The count comes from a
/// single forward scan in O(n) time and O(1) space; no word list is ever
/// materialized.
///
/// # Example
///
/// ```rust
/// use content_summary::total_words;
///
/// assert_eq!(total_words("One, Two,      Three"), 3);
/// ```
#[must_use]
pub fn total_words(text: &str) -> usize {
    text.split_whitespace().count()
}
