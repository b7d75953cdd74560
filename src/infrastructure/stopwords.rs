//! Stopword list loading.

use crate::error::AppError;
use crate::infrastructure::wordlist;
use std::collections::HashSet;
use std::path::Path;

const BUILT_IN: &str = include_str!("../../data/stopwords_zh.txt");

/// Returns the bundled Chinese stopword list.
pub fn built_in() -> HashSet<String> {
    wordlist::parse_entries(BUILT_IN)
        .map(str::to_string)
        .collect()
}

/// Loads a stopword list from a file, one token per line.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the file cannot be read.
pub fn from_file(path: &Path) -> Result<HashSet<String>, AppError> {
    Ok(wordlist::load_entries(path)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_list_is_not_empty() {
        let stopwords = built_in();
        assert!(!stopwords.is_empty());
        assert!(stopwords.contains("我们"));
    }

    #[test]
    fn test_built_in_list_has_no_comment_lines() {
        assert!(built_in().iter().all(|word| !word.starts_with('#')));
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = from_file(Path::new("/nonexistent/stopwords.txt"));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
