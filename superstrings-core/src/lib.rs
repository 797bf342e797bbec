//! Approximate shortest common superstrings
//!
//! Packs a word list into one compact buffer in which every word occurs as a
//! contiguous substring, so each word can be stored as an offset and length
//! into that buffer.
//!
//! The pipeline is a substring-free reduction followed by a pluggable
//! solver: [`GreedyMerger`] by default, or the exact but factorial
//! [`BruteForceSolver`] for small inputs.
//!
//! # Example
//!
//! ```rust
//! use superstrings_core::{generate_superstring, WordTable};
//!
//! let words = ["LDA", "STA", "TAX", "AXS"];
//! let superstring = generate_superstring(&words);
//! assert_eq!(superstring, "LDASTAXS");
//!
//! let table = WordTable::locate(&superstring, &words).unwrap();
//! assert_eq!(table.offsets(), vec![0, 3, 4, 5]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod ordering;
pub mod overlap;
pub mod solver;
pub mod stats;
pub mod superstring;
pub mod table;

// Re-export key types
pub use error::{Result, SuperstringError};
pub use filter::{is_substring_free, make_substring_free};
pub use overlap::{find_max_overlap, Overlap};
pub use solver::{BruteForceSolver, GreedyMerger, Solver, SolverKind};
pub use stats::SymbolStats;
pub use superstring::{generate_superstring, generate_superstring_with};
pub use table::{bits, Entry, WordTable};
