//! Offset/length table for words packed into a superstring
//!
//! Offsets and lengths count characters of the superstring.

use crate::error::{Result, SuperstringError};
use serde::Serialize;

/// Bits needed to store values up to `n`, as estimated for table sizing.
///
/// Zero still takes one bit; otherwise this is `ceil(log2(n))`, which makes
/// `bits(1) == 0`.
pub fn bits(n: usize) -> u32 {
    match n {
        0 => 1,
        n => usize::BITS - (n - 1).leading_zeros(),
    }
}

/// Location of one word inside the superstring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Character offset of the first occurrence
    pub offset: usize,
    /// Word length in characters
    pub length: usize,
}

/// Per-word offsets and lengths, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordTable {
    entries: Vec<Entry>,
    superstring_len: usize,
}

impl WordTable {
    /// Locate every word in `superstring` and verify each location.
    ///
    /// Words are looked up in the order given, duplicates included, so the
    /// table lines up with the caller's original list.
    pub fn locate<S: AsRef<str>>(superstring: &str, words: &[S]) -> Result<Self> {
        if words.is_empty() {
            return Err(SuperstringError::EmptyWordSet);
        }

        let entries = words
            .iter()
            .map(|word| locate_word(superstring, word.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            entries,
            superstring_len: superstring.chars().count(),
        })
    }

    /// All entries in input order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offsets in input order
    pub fn offsets(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.offset).collect()
    }

    /// Lengths in input order
    pub fn lengths(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.length).collect()
    }

    /// Lengths with the minimum length subtracted
    pub fn rebased_lengths(&self) -> Vec<usize> {
        let min = self.min_length();
        self.entries.iter().map(|e| e.length - min).collect()
    }

    /// Superstring length in characters
    pub fn superstring_len(&self) -> usize {
        self.superstring_len
    }

    /// Largest offset
    pub fn max_offset(&self) -> usize {
        self.entries.iter().map(|e| e.offset).max().unwrap_or(0)
    }

    /// Sum of per-offset bit widths
    pub fn index_bits_estimate(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(bits(e.offset))).sum()
    }

    /// Fixed bit width able to hold every offset
    pub fn offset_unit_bits(&self) -> u32 {
        bits(self.max_offset())
    }

    /// Size of a fixed-width offset table in whole bytes
    pub fn offset_table_bytes(&self) -> usize {
        self.offset_unit_bits() as usize * self.len() / 8
    }

    /// Shortest word length
    pub fn min_length(&self) -> usize {
        self.entries.iter().map(|e| e.length).min().unwrap_or(0)
    }

    /// Longest word length
    pub fn max_length(&self) -> usize {
        self.entries.iter().map(|e| e.length).max().unwrap_or(0)
    }

    /// Whether every word has the same length, making a length table unnecessary
    pub fn lengths_uniform(&self) -> bool {
        self.min_length() == self.max_length()
    }

    /// Fixed bit width able to hold every (optionally rebased) length
    pub fn length_unit_bits(&self, rebased: bool) -> u32 {
        if rebased {
            bits(self.max_length() - self.min_length())
        } else {
            bits(self.max_length())
        }
    }

    /// Size of a fixed-width length table in whole bytes
    pub fn length_table_bytes(&self, rebased: bool) -> usize {
        self.length_unit_bits(rebased) as usize * self.len() / 8
    }

    /// Whether subtracting the minimum length would shrink the length unit
    pub fn rebase_would_help(&self) -> bool {
        self.length_unit_bits(false) > self.length_unit_bits(true)
    }

    /// Superstring plus offset table plus (when needed) length table, in bytes
    pub fn packed_size(&self, rebased: bool) -> usize {
        let lengths = if self.lengths_uniform() {
            0
        } else {
            self.length_table_bytes(rebased)
        };
        self.superstring_len + self.offset_table_bytes() + lengths
    }
}

fn locate_word(superstring: &str, word: &str) -> Result<Entry> {
    let byte_offset = superstring
        .find(word)
        .ok_or_else(|| SuperstringError::WordNotFound {
            word: word.to_string(),
        })?;

    let offset = superstring[..byte_offset].chars().count();
    let length = word.chars().count();

    let found: String = superstring.chars().skip(offset).take(length).collect();
    if found != word {
        return Err(SuperstringError::OffsetMismatch {
            word: word.to_string(),
            offset,
            found,
        });
    }

    Ok(Entry { offset, length })
}
