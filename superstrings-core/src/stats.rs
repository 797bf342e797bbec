//! Symbol statistics for a generated superstring

use crate::table::bits;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sorted distinct characters of `s`
pub fn alphabet(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars.dedup();
    chars.into_iter().collect()
}

/// Shannon entropy of the character distribution, in bits per symbol
pub fn shannon_entropy(s: &str) -> f64 {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;
    for ch in s.chars() {
        *counts.entry(ch).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    -counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Alphabet and entropy summary of a string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolStats {
    /// Distinct characters in sorted order
    pub alphabet: String,
    /// Number of distinct characters
    pub alphabet_size: usize,
    /// Fixed bit width able to index the alphabet
    pub symbol_bits: u32,
    /// Entropy in bits per symbol
    pub entropy: f64,
    /// Entropy of the whole string in bits
    pub entropy_bits: f64,
    /// `entropy_bits` rounded up to whole bytes
    pub entropy_bytes: u64,
}

impl SymbolStats {
    /// Compute statistics for `s`
    pub fn of(s: &str) -> Self {
        let alphabet = alphabet(s);
        let alphabet_size = alphabet.chars().count();
        let entropy = shannon_entropy(s);
        let entropy_bits = entropy * s.chars().count() as f64;

        Self {
            alphabet,
            alphabet_size,
            symbol_bits: bits(alphabet_size),
            entropy,
            entropy_bits,
            entropy_bytes: (entropy_bits / 8.0).ceil() as u64,
        }
    }
}
