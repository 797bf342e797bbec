//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Nothing left to pack after loading
    EmptyInput(String),
    /// Brute-force solver refused because the input is too large
    SolverLimit {
        /// Words the solver would have to permute
        words: usize,
        /// Configured maximum
        limit: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::EmptyInput(path) => write!(f, "No words found in input: {path}"),
            CliError::SolverLimit { words, limit } => write!(
                f,
                "Brute-force solver limited to {limit} words, input has {words}"
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
