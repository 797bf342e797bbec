//! Plain text output formatter

use super::OutputFormatter;
use crate::report::Report;
use anyhow::Result;
use std::io::Write;

/// What the text report shows
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Only the superstring and raw tables
    pub quiet: bool,
    /// Verbosity level
    pub verbose: u8,
    /// Always print the offset table
    pub index_table: bool,
    /// Always print the length table
    pub length_table: bool,
}

/// Plain text formatter
pub struct TextFormatter<W: Write> {
    writer: W,
    options: TextOptions,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: TextOptions) -> Self {
        Self { writer, options }
    }

    fn write_preamble(&mut self, report: &Report) -> Result<()> {
        let verbose = self.options.verbose;

        for step in &report.steps {
            writeln!(self.writer, "{step}")?;
        }

        if verbose > 1 && !report.histogram.is_empty() {
            writeln!(self.writer, "Histogram:")?;
            for entry in &report.histogram {
                writeln!(self.writer, "{} => {}", entry.word, entry.count)?;
            }
        }

        if verbose > 0 {
            let input = &report.input;
            writeln!(
                self.writer,
                "{} strings (total len={}, min/max klen={}/{}) in input, {} unique strings (total len={}) remain.",
                input.words,
                input.total_len,
                input.min_len,
                input.max_len,
                input.unique_words,
                input.unique_total_len
            )?;
            writeln!(self.writer, "Final pre-processed input:")?;
        }
        writeln!(self.writer, "{:?}", report.prepared)?;

        if verbose > 0 {
            let symbols = &report.symbols;
            writeln!(
                self.writer,
                "Output alphabet size={} ({} bits/symbol):\n{}",
                symbols.alphabet_size, symbols.symbol_bits, symbols.alphabet
            )?;
            writeln!(
                self.writer,
                "Shannon entropy: {:.6} bits/symbol, {:.4} bits ({} bytes)",
                symbols.entropy, symbols.entropy_bits, symbols.entropy_bytes
            )?;
        }

        let noun = if report.solver.is_some() {
            "Generated Superstring"
        } else {
            "Joined string"
        };
        writeln!(
            self.writer,
            "{noun} is {} characters, saving {} on original, {} on unique:",
            report.superstring_len, report.saved_on_original, report.saved_on_unique
        )?;

        Ok(())
    }

    fn write_offsets(&mut self, report: &Report) -> Result<()> {
        let table = &report.table;
        if !self.options.quiet {
            writeln!(
                self.writer,
                "The {} verified ok offsets (~{}/{}*8 bits, min unit={} bits) are:",
                table.offsets.len(),
                table.index_bits_estimate,
                table.offset_table_bytes,
                table.offset_unit_bits
            )?;
        }
        writeln!(self.writer, "{:?}", table.offsets)?;
        Ok(())
    }

    fn write_lengths(&mut self, report: &Report) -> Result<()> {
        let table = &report.table;
        if !self.options.quiet {
            writeln!(
                self.writer,
                "The {} lengths with min/max={}/{}, req. bits/entry={} bits, ({} bytes total) are:",
                table.lengths.len(),
                table.min_length,
                table.max_length,
                table.length_unit_bits,
                table.length_table_bytes
            )?;
            if !table.lengths_rebased && table.rebase_would_help {
                writeln!(
                    self.writer,
                    "NOTE: Could be optimized by subtracting out minimum first, for smaller unit size, see --rebase-lengths"
                )?;
            }
            if table.lengths_rebased {
                writeln!(
                    self.writer,
                    "(lengths rebased, add back {} for true values)",
                    table.min_length
                )?;
            }
        }
        writeln!(self.writer, "{:?}", table.lengths)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        if !self.options.quiet {
            self.write_preamble(report)?;
        }

        writeln!(self.writer, "{}", report.superstring)?;

        if self.options.index_table {
            self.write_offsets(report)?;
        }

        if self.options.length_table || !report.table.lengths_uniform {
            self.write_lengths(report)?;
        }

        if self.options.verbose > 0 && !self.options.quiet {
            let lengths = if report.table.lengths_uniform {
                0
            } else {
                report.table.length_table_bytes
            };
            writeln!(
                self.writer,
                "Packed: {} + {} + {} = {} bytes. Direct: {} bytes.",
                report.superstring_len,
                report.table.offset_table_bytes,
                lengths,
                report.packed_size,
                report.input.total_len
            )?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
