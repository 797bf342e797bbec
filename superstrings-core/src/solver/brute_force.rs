//! Exact solver by exhaustive permutation search
//!
//! Costs O(n! · n · L). Only meant as a reference for inputs of roughly a
//! dozen words or fewer; callers must bound the input size themselves.

use super::{Solver, SolverKind};

/// Exhaustive permutation solver
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    /// Concatenate `words` in the given order, overlapping each new word with
    /// the running superstring
    fn chain(words: &[String], order: &[usize]) -> String {
        let mut iter = order.iter().map(|&i| words[i].as_str());
        let mut superstring = iter.next().unwrap_or_default().to_string();

        for word in iter {
            let overlap = suffix_prefix_overlap(&superstring, word);
            superstring.push_str(&word[overlap..]);
        }

        superstring
    }
}

impl Solver for BruteForceSolver {
    fn solve(&self, words: Vec<String>) -> String {
        if words.is_empty() {
            return String::new();
        }

        log::debug!("brute force over {} words", words.len());

        let mut order: Vec<usize> = (0..words.len()).collect();
        let mut best = Self::chain(&words, &order);
        let mut best_len = best.chars().count();
        let mut evaluated = 1usize;

        while next_permutation(&mut order) {
            let candidate = Self::chain(&words, &order);
            let candidate_len = candidate.chars().count();
            if candidate_len < best_len {
                best = candidate;
                best_len = candidate_len;
            }
            evaluated += 1;
        }

        log::debug!("evaluated {evaluated} orderings, best length {best_len}");

        best
    }

    fn kind(&self) -> SolverKind {
        SolverKind::BruteForce
    }
}

/// Byte length of the longest suffix of `left` that is a prefix of `right`.
///
/// Alignment points are found by searching `left` for the first character of
/// `right`, starting where the whole of `right` could still fit; the first
/// alignment that `right` starts with is the longest.
fn suffix_prefix_overlap(left: &str, right: &str) -> usize {
    let Some(first) = right.chars().next() else {
        return 0;
    };

    let mut start = left.len().saturating_sub(right.len());
    while !left.is_char_boundary(start) {
        start += 1;
    }

    while let Some(found) = left[start..].find(first) {
        let pos = start + found;
        if right.starts_with(&left[pos..]) {
            return left.len() - pos;
        }
        start = pos + first.len_utf8();
    }

    0
}

/// Advance `order` to the next lexicographic permutation; false once exhausted
fn next_permutation(order: &mut [usize]) -> bool {
    let Some(pivot) = order.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };

    let successor = order
        .iter()
        .rposition(|&x| x > order[pivot])
        .unwrap_or(pivot + 1);
    order.swap(pivot, successor);
    order[pivot + 1..].reverse();

    true
}
