//! Forward-maximum-matching word segmentation.

use crate::domain::capabilities::WordSegmenter;
use crate::error::AppError;
use crate::infrastructure::wordlist;
use std::collections::HashSet;
use std::path::Path;

const BUILT_IN: &str = include_str!("../../../data/lexicon_zh.txt");

/// Dictionary-driven segmenter using forward maximum matching.
///
/// At each position the longest dictionary word starting there is taken as
/// the next token; when no dictionary word matches, the single character is
/// emitted on its own. Single-character fallback tokens are filtered out
/// later by the tokenization step, so an out-of-dictionary run degrades to
/// silence rather than garbage tokens.
pub struct FmmSegmenter {
    words: HashSet<String>,
    max_word_chars: usize,
}

impl FmmSegmenter {
    /// Builds a segmenter over the given dictionary words.
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let words: HashSet<String> = words.into_iter().collect();
        let max_word_chars = words
            .iter()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(1)
            .max(1);
        Self {
            words,
            max_word_chars,
        }
    }

    /// Builds a segmenter over the bundled dictionary.
    pub fn built_in() -> Self {
        Self::new(wordlist::parse_entries(BUILT_IN).map(str::to_string))
    }

    /// Loads a dictionary file, one word per line.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        Ok(Self::new(wordlist::load_entries(path)?))
    }
}

impl WordSegmenter for FmmSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut position = 0;

        while position < chars.len() {
            let window = self.max_word_chars.min(chars.len() - position);
            let mut taken = 1;
            for length in (2..=window).rev() {
                let candidate: String = chars[position..position + length].iter().collect();
                if self.words.contains(&candidate) {
                    taken = length;
                    break;
                }
            }
            tokens.push(chars[position..position + taken].iter().collect());
            position += taken;
        }

        tokens
    }
}
