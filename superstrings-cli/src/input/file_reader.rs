//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}

/// Split text into words, one per line.
///
/// Lines starting with any non-empty comment prefix are skipped. Other lines
/// are trimmed and kept, so a blank line becomes an empty word.
pub fn parse_words<P: AsRef<str>>(text: &str, comment_prefixes: &[P]) -> Vec<String> {
    text.lines()
        .filter(|line| {
            !comment_prefixes
                .iter()
                .map(|prefix| prefix.as_ref())
                .any(|prefix| !prefix.is_empty() && line.starts_with(prefix))
        })
        .map(|line| line.trim().to_string())
        .collect()
}

/// Load a word list file
pub fn load_words<P: AsRef<str>>(path: &Path, comment_prefixes: &[P]) -> Result<Vec<String>> {
    let text = FileReader::read_text(path)?;
    let words = parse_words(&text, comment_prefixes);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
