//! Input reordering applied before superstring generation
//!
//! Order does not affect correctness, but it changes the greedy solver's
//! tie-breaking and so the length of the result.

use crate::error::{Result, SuperstringError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

/// Remove exact duplicates, keeping the first occurrence of each word
pub fn dedup_first_occurrence<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref();
        if !unique.iter().any(|u| u == word) {
            unique.push(word.to_string());
        }
    }
    unique
}

/// Occurrence count of a word in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frequency {
    /// The word
    pub word: String,
    /// How many times it appeared
    pub count: usize,
}

/// Unique words ordered by descending frequency.
///
/// Words with equal counts keep their first-occurrence order.
pub fn sort_by_frequency<S: AsRef<str>>(words: &[S]) -> Vec<Frequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in words {
        *counts.entry(word.as_ref()).or_insert(0) += 1;
    }

    let mut histogram: Vec<Frequency> = dedup_first_occurrence(words)
        .into_iter()
        .map(|word| {
            let count = counts.get(word.as_str()).copied().unwrap_or(0);
            Frequency { word, count }
        })
        .collect();

    // Stable sort keeps first-occurrence order among ties
    histogram.sort_by(|a, b| b.count.cmp(&a.count));
    histogram
}

/// Shuffle the words in place
pub fn shuffle<R: Rng + ?Sized>(words: &mut [String], rng: &mut R) {
    words.shuffle(rng);
}

/// A word moved to the front of the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    /// The word that moved
    pub word: String,
    /// Where it was before moving
    pub from: usize,
}

/// Move each key to the front of `words`, in key order.
///
/// The last key ends up first. Keys already at the front produce no move.
pub fn move_to_front<S: AsRef<str>>(words: &mut Vec<String>, keys: &[S]) -> Result<Vec<Move>> {
    let mut moves = Vec::new();

    for key in keys {
        let key = key.as_ref();
        let index = words.iter().position(|w| w == key).ok_or_else(|| {
            SuperstringError::MoveToFrontMissing {
                word: key.to_string(),
            }
        })?;

        if index > 0 {
            let word = words.remove(index);
            words.insert(0, word);
            moves.push(Move {
                word: key.to_string(),
                from: index,
            });
        }
    }

    Ok(moves)
}
