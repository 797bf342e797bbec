//! Error types for the bookkeeping around the superstring algorithms
//!
//! The solvers themselves never fail; these errors come from building the
//! word table and reordering input.

use thiserror::Error;

/// Errors raised while reordering input or laying out the word table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuperstringError {
    /// A word does not occur anywhere in the superstring
    #[error("word '{word}' not found in superstring")]
    WordNotFound {
        /// The missing word
        word: String,
    },

    /// The text found at a recorded offset differs from the word
    #[error("expected '{word}' at offset {offset}, got '{found}'")]
    OffsetMismatch {
        /// The word being verified
        word: String,
        /// Character offset where the word was expected
        offset: usize,
        /// Text actually present at that offset
        found: String,
    },

    /// A move-to-front key is not part of the word set
    #[error("move-to-front word '{word}' is not in the input")]
    MoveToFrontMissing {
        /// The key that could not be found
        word: String,
    },

    /// An operation that needs at least one word got none
    #[error("word set is empty")]
    EmptyWordSet,
}

/// Result type for superstring bookkeeping operations
pub type Result<T> = std::result::Result<T, SuperstringError>;
