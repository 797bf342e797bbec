//! Report assembled from one superstring run

use serde::Serialize;
use superstrings_core::ordering::Frequency;
use superstrings_core::{SolverKind, SymbolStats, WordTable};

/// Sizes of the input before and after duplicate removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    /// Words in the input file
    pub words: usize,
    /// Total characters over all input words
    pub total_len: usize,
    /// Shortest input word
    pub min_len: usize,
    /// Longest input word
    pub max_len: usize,
    /// Words left after duplicate removal
    pub unique_words: usize,
    /// Total characters over the unique words
    pub unique_total_len: usize,
}

/// Offset and length tables with their sizing estimates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    /// Character offset of every input word
    pub offsets: Vec<usize>,
    /// Length of every input word, minus `min_length` when rebased
    pub lengths: Vec<usize>,
    /// Whether `lengths` had the minimum subtracted
    pub lengths_rebased: bool,
    /// Shortest word length
    pub min_length: usize,
    /// Longest word length
    pub max_length: usize,
    /// Sum of per-offset bit widths
    pub index_bits_estimate: u64,
    /// Fixed bit width for offsets
    pub offset_unit_bits: u32,
    /// Fixed-width offset table size in bytes
    pub offset_table_bytes: usize,
    /// Fixed bit width for lengths
    pub length_unit_bits: u32,
    /// Fixed-width length table size in bytes
    pub length_table_bytes: usize,
    /// Whether all words share one length
    pub lengths_uniform: bool,
    /// Whether rebasing would shrink the length unit
    pub rebase_would_help: bool,
}

impl TableSummary {
    /// Summarize `table`, optionally rebasing lengths on the minimum
    pub fn from_table(table: &WordTable, rebased: bool) -> Self {
        let lengths = if rebased {
            table.rebased_lengths()
        } else {
            table.lengths()
        };

        Self {
            offsets: table.offsets(),
            lengths,
            lengths_rebased: rebased,
            min_length: table.min_length(),
            max_length: table.max_length(),
            index_bits_estimate: table.index_bits_estimate(),
            offset_unit_bits: table.offset_unit_bits(),
            offset_table_bytes: table.offset_table_bytes(),
            length_unit_bits: table.length_unit_bits(rebased),
            length_table_bytes: table.length_table_bytes(rebased),
            lengths_uniform: table.lengths_uniform(),
            rebase_would_help: table.rebase_would_help(),
        }
    }
}

/// Everything a formatter needs to describe one run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Input sizes
    pub input: InputSummary,
    /// Preprocessing steps taken, in order
    pub steps: Vec<String>,
    /// Word frequencies, present when input was sorted by frequency
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub histogram: Vec<Frequency>,
    /// The word list handed to the solver
    pub prepared: Vec<String>,
    /// Solver used, or none when the input was only joined
    pub solver: Option<SolverKind>,
    /// The generated superstring
    pub superstring: String,
    /// Superstring length in characters
    pub superstring_len: usize,
    /// Characters saved relative to the raw input
    pub saved_on_original: i64,
    /// Characters saved relative to the unique words
    pub saved_on_unique: i64,
    /// Offset and length tables
    pub table: TableSummary,
    /// Alphabet and entropy of the superstring
    pub symbols: SymbolStats,
    /// Superstring plus tables, in bytes
    pub packed_size: usize,
}

/// Inputs to [`Report::new`]
pub struct RunOutcome<'a> {
    /// Words as loaded, duplicates included
    pub original: &'a [String],
    /// Words after reordering, as given to the solver
    pub prepared: Vec<String>,
    /// Preprocessing notes
    pub steps: Vec<String>,
    /// Frequency histogram, if computed
    pub histogram: Vec<Frequency>,
    /// Solver used
    pub solver: Option<SolverKind>,
    /// Result string
    pub superstring: String,
    /// Verified table over `original`
    pub table: &'a WordTable,
    /// Rebase lengths on the minimum
    pub rebase_lengths: bool,
}

fn char_total<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| w.as_ref().chars().count()).sum()
}

impl Report {
    /// Assemble the report for one run
    pub fn new(outcome: RunOutcome<'_>) -> Self {
        let table = outcome.table;
        let total_len = char_total(outcome.original);
        let unique_total_len = char_total(&outcome.prepared);
        let superstring_len = table.superstring_len();

        Self {
            input: InputSummary {
                words: outcome.original.len(),
                total_len,
                min_len: table.min_length(),
                max_len: table.max_length(),
                unique_words: outcome.prepared.len(),
                unique_total_len,
            },
            steps: outcome.steps,
            histogram: outcome.histogram,
            prepared: outcome.prepared,
            solver: outcome.solver,
            symbols: SymbolStats::of(&outcome.superstring),
            superstring: outcome.superstring,
            superstring_len,
            saved_on_original: total_len as i64 - superstring_len as i64,
            saved_on_unique: unique_total_len as i64 - superstring_len as i64,
            table: TableSummary::from_table(table, outcome.rebase_lengths),
            packed_size: table.packed_size(outcome.rebase_lengths),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use superstrings_core::generate_superstring;

    pub(crate) fn sample_report(rebase_lengths: bool) -> Report {
        let original: Vec<String> = ["LDA", "STA", "TAX", "LDA", "AXS", "SBC", "BCC", "CLC"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let prepared = superstrings_core::ordering::dedup_first_occurrence(&original);
        let superstring = generate_superstring(&prepared);
        let table = WordTable::locate(&superstring, &original).unwrap();

        Report::new(RunOutcome {
            original: &original,
            prepared,
            steps: vec!["Removing duplicates from input.".to_string()],
            histogram: Vec::new(),
            solver: Some(SolverKind::Greedy),
            superstring,
            table: &table,
            rebase_lengths,
        })
    }

    #[test]
    fn test_input_summary() {
        let report = sample_report(false);
        assert_eq!(report.input.words, 8);
        assert_eq!(report.input.total_len, 24);
        assert_eq!(report.input.unique_words, 7);
        assert_eq!(report.input.unique_total_len, 21);
        assert_eq!(report.input.min_len, 3);
        assert_eq!(report.input.max_len, 3);
    }

    #[test]
    fn test_savings() {
        let report = sample_report(false);
        assert_eq!(report.superstring_len, report.superstring.chars().count());
        assert_eq!(
            report.saved_on_original,
            24 - report.superstring_len as i64
        );
        assert_eq!(report.saved_on_unique, 21 - report.superstring_len as i64);
    }

    #[test]
    fn test_table_summary_lines_up_with_input() {
        let report = sample_report(false);
        assert_eq!(report.table.offsets.len(), 8);
        assert_eq!(report.table.offsets[0], report.table.offsets[3]);
        assert!(report.table.lengths_uniform);
        assert_eq!(report.table.lengths, vec![3; 8]);
    }

    #[test]
    fn test_rebased_lengths() {
        let report = sample_report(true);
        assert!(report.table.lengths_rebased);
        assert_eq!(report.table.lengths, vec![0; 8]);
    }
}
