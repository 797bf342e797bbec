//! Output formatting module

use crate::report::Report;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a report
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::{TextFormatter, TextOptions};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// The full report as JSON
    Json,
}

impl OutputFormat {
    /// All formats
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "superstring, tables, and statistics as plain text",
            OutputFormat::Json => "the complete report as a JSON object",
        }
    }
}

/// Writer for the report destination: a file, or stdout when none is given
pub fn create_writer(output: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
