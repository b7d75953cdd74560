//! Word-list file parsing shared by the lexicon-backed components.
//!
//! Lists are UTF-8 text, one entry per line. Blank lines and lines starting
//! with `#` are skipped; entries are trimmed.

use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Parses word-list text into its entries.
pub(crate) fn parse_entries(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Reads a word-list file from disk.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the file cannot be read; a missing
/// or unreadable list is a configuration problem.
pub(crate) fn load_entries(path: &Path) -> Result<Vec<String>, AppError> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::validation(format!("cannot read word list {}: {e}", path.display()))
    })?;
    Ok(parse_entries(&text).map(str::to_string).collect())
}
