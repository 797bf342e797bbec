//! Algorithm GREEDY
//!
//! Start with the input set S. Pick two strings with maximum overlap,
//! replace them by their merge, and repeat until one string remains.
//! This is conjectured to be within a factor 2 of optimal.
//!
//! References:
//! - Blum et al., "Linear Approximation of Shortest Superstrings", 1994.
//! - Kaplan & Shafrir, "The greedy algorithm for shortest superstrings", 2004.
//!
//! The overlap used here is not exactly Blum's formulation with respect to
//! self-overlap, and the result depends on input order.

use super::{Solver, SolverKind};
use crate::overlap::find_max_overlap;

/// Greedy maximal-overlap merger
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyMerger;

/// The best pair found during one scan
struct BestPair {
    length: usize,
    left: usize,
    right: usize,
    merged: String,
}

impl GreedyMerger {
    /// Scan every pair `(i, j)`, `i < j`, keeping the first strictly longest overlap
    fn best_pair(words: &[String]) -> Option<BestPair> {
        let mut best: Option<BestPair> = None;

        for (i, left) in words.iter().enumerate() {
            for (j, right) in words.iter().enumerate().skip(i + 1) {
                let overlap = find_max_overlap(left, right);
                let longest = best.as_ref().map_or(0, |b| b.length);
                if overlap.length > longest {
                    best = Some(BestPair {
                        length: overlap.length,
                        left: i,
                        right: j,
                        merged: overlap.merged,
                    });
                }
            }
        }

        best
    }
}

impl Solver for GreedyMerger {
    fn solve(&self, mut words: Vec<String>) -> String {
        log::debug!("greedy merge over {} words", words.len());

        // The vector length is the active size; each round shrinks it by one.
        while words.len() > 1 {
            match Self::best_pair(&words) {
                Some(best) => {
                    log::trace!(
                        "merging #{} and #{} on {} characters",
                        best.left,
                        best.right,
                        best.length
                    );
                    words[best.left] = best.merged;
                    words.swap_remove(best.right);
                }
                None => {
                    // No overlap anywhere; appending the last element is as good as any.
                    if let Some(last) = words.pop() {
                        log::trace!("no overlap left, concatenating {last:?} onto #0");
                        words[0].push_str(&last);
                    }
                }
            }
        }

        words.pop().unwrap_or_default()
    }

    fn kind(&self) -> SolverKind {
        SolverKind::Greedy
    }
}
