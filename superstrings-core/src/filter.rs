//! Substring-free reduction

/// Create a new list from the input that is substring free.
///
/// An element survives only if it is not contained in any *other* element.
/// Survivors keep their relative order.
///
/// Two equal elements contain each other, so exact duplicates remove each
/// other entirely instead of collapsing to one copy. Deduplicate upstream
/// (see [`crate::ordering::dedup_first_occurrence`]) when one copy should
/// survive.
///
/// ```
/// use superstrings_core::make_substring_free;
///
/// let words = ["n", "ora", "bne", "eor"];
/// assert_eq!(make_substring_free(&words), vec!["ora", "bne", "eor"]);
/// assert!(make_substring_free(&["ab", "ab"]).is_empty());
/// ```
pub fn make_substring_free<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let reduced: Vec<String> = words
        .iter()
        .enumerate()
        .filter(|&(i, word)| {
            let word = word.as_ref();
            !words
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && other.as_ref().contains(word))
        })
        .map(|(_, word)| word.as_ref().to_string())
        .collect();

    log::debug!(
        "substring-free reduction kept {} of {} words",
        reduced.len(),
        words.len()
    );

    reduced
}

/// Check whether no element is a substring of another
pub fn is_substring_free<S: AsRef<str>>(words: &[S]) -> bool {
    make_substring_free(words).len() == words.len()
}
