//! Superstring generation entry points

use crate::filter::make_substring_free;
use crate::solver::{GreedyMerger, Solver};

/// Generate an approximate superstring with the greedy solver.
///
/// ```
/// use superstrings_core::generate_superstring;
///
/// let superstring = generate_superstring(&["GATTA", "TTACA", "ACAGG"]);
/// assert_eq!(superstring, "GATTACAGG");
/// ```
pub fn generate_superstring<S: AsRef<str>>(words: &[S]) -> String {
    generate_superstring_with(words, &GreedyMerger)
}

/// Generate a superstring with the given solver.
///
/// The input is first reduced to a substring-free set; the solver works on
/// that copy, so `words` is never modified. Every surviving word occurs in
/// the result. An input that reduces to nothing yields an empty string.
pub fn generate_superstring_with<S, V>(words: &[S], solver: &V) -> String
where
    S: AsRef<str>,
    V: Solver + ?Sized,
{
    let reduced = make_substring_free(words);
    if reduced.is_empty() {
        return String::new();
    }

    solver.solve(reduced)
}
