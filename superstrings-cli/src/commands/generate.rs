//! Generate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::load_words;
use crate::output::{
    create_writer, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter, TextOptions,
};
use crate::progress::ProgressReporter;
use crate::report::{Report, RunOutcome};
use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use superstrings_core::ordering::{
    dedup_first_occurrence, move_to_front, shuffle, sort_by_frequency,
};
use superstrings_core::{make_substring_free, Solver, SolverKind, WordTable};

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Input set of strings, one per line
    #[arg(value_name = "INFILE")]
    pub infile: PathBuf,

    /// Only output the generated string (and any requested tables)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Shuffle the input
    #[arg(short = 's', long, conflicts_with = "sort")]
    pub shuffle: bool,

    /// Sort input by frequency of terms
    #[arg(short = 'S', long)]
    pub sort: bool,

    /// Seed for --shuffle, for reproducible runs
    #[arg(long, value_name = "N", requires = "shuffle")]
    pub seed: Option<u64>,

    /// String(s) that start a comment in the input
    #[arg(long, value_name = "PREFIX")]
    pub comment: Vec<String>,

    /// Input element(s) to move to the front
    #[arg(long, value_name = "WORD")]
    pub mtf: Vec<String>,

    /// Only join the input, don't generate a superstring
    #[arg(short = 'J', long)]
    pub join_only: bool,

    /// Superstring solver (greedy, brute-force)
    #[arg(long, value_name = "SOLVER", conflicts_with = "join_only")]
    pub solver: Option<SolverKind>,

    /// Always output the offset table
    #[arg(short = 'I', long)]
    pub index_table: bool,

    /// Always output the lengths table
    #[arg(short = 'L', long)]
    pub length_table: bool,

    /// Subtract the minimum length from every length
    #[arg(long)]
    pub rebase_lengths: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting superstring generation");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let report = self.run(&config)?;

        let format = self.format.unwrap_or(config.output.default_format);
        let writer = create_writer(self.output.as_deref())?;
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, self.text_options())),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        formatter.format_report(&report)?;
        formatter.finish()
    }

    /// Load, reorder, solve, and verify
    pub fn run(&self, config: &CliConfig) -> Result<Report> {
        let prefixes = if self.comment.is_empty() {
            &config.input.comment_prefixes
        } else {
            &self.comment
        };
        log::debug!("Comment prefix(es): {:?}", prefixes);

        let original = load_words(&self.infile, prefixes)?;
        if original.is_empty() {
            return Err(CliError::EmptyInput(self.infile.display().to_string()).into());
        }

        let mut steps = Vec::new();
        let (mut prepared, histogram) = if self.sort {
            steps.push("Removing duplicates by sorting input by frequency.".to_string());
            let histogram = sort_by_frequency(&original);
            let words = histogram.iter().map(|f| f.word.clone()).collect();
            (words, histogram)
        } else {
            steps.push("Removing duplicates from input.".to_string());
            (dedup_first_occurrence(&original), Vec::new())
        };

        if self.shuffle {
            steps.push("Shuffling input.".to_string());
            match self.seed {
                Some(seed) => shuffle(&mut prepared, &mut StdRng::seed_from_u64(seed)),
                None => shuffle(&mut prepared, &mut rand::rng()),
            }
        }

        if !self.mtf.is_empty() {
            log::info!("Applying move to front on input set {:?}", self.mtf);
            for moved in move_to_front(&mut prepared, &self.mtf)? {
                steps.push(format!(
                    "Moved {} at index {} to front.",
                    moved.word, moved.from
                ));
            }
        }

        let solver = if self.join_only {
            None
        } else {
            Some(self.solver.unwrap_or(config.solver.default))
        };

        let superstring = match solver {
            Some(kind) => self.solve(kind, &prepared, config)?,
            None => prepared.concat(),
        };

        let table = WordTable::locate(&superstring, &original)
            .context("Consistency check failed: superstring does not encode the input")?;

        Ok(Report::new(RunOutcome {
            original: &original,
            prepared,
            steps,
            histogram,
            solver,
            superstring,
            table: &table,
            rebase_lengths: self.rebase_lengths,
        }))
    }

    fn solve(&self, kind: SolverKind, words: &[String], config: &CliConfig) -> Result<String> {
        let reduced = make_substring_free(words);

        let limit = config.solver.brute_force_limit;
        if kind == SolverKind::BruteForce && reduced.len() > limit {
            return Err(CliError::SolverLimit {
                words: reduced.len(),
                limit,
            }
            .into());
        }

        if reduced.is_empty() {
            return Ok(String::new());
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(kind.as_str(), reduced.len());
        let superstring = kind.solver().solve(reduced);
        progress.finish();

        log::info!(
            "{} solver produced {} characters from {} words",
            kind,
            superstring.chars().count(),
            words.len()
        );

        Ok(superstring)
    }

    fn text_options(&self) -> TextOptions {
        TextOptions {
            quiet: self.quiet,
            verbose: self.verbose,
            index_table: self.index_table,
            length_table: self.length_table,
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
