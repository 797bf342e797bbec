//! Superstrings CLI library
//!
//! This library provides the command-line interface for packing word
//! lists into a shortest common superstring.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod report;

pub use error::{CliError, CliResult};
