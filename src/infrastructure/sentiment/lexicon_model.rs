//! Polarity-wordlist sentiment scoring.

use crate::domain::capabilities::SentimentModel;
use crate::error::AppError;
use crate::infrastructure::wordlist;
use std::path::Path;

const BUILT_IN_POSITIVE: &str = include_str!("../../../data/sentiment_positive_zh.txt");
const BUILT_IN_NEGATIVE: &str = include_str!("../../../data/sentiment_negative_zh.txt");

/// Scores text by counting occurrences of polarity terms.
///
/// The score is `0.5 + 0.5 * (pos - neg) / (pos + neg)`, so all-positive
/// text scores 1.0, all-negative 0.0, and text without any polarity term
/// sits at the neutral 0.5. Negated phrases are handled by listing them as
/// explicit negative terms (`不好玩`, `不值得`), which outweigh the
/// positive substring they contain.
pub struct LexiconSentimentModel {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl LexiconSentimentModel {
    /// Builds a model over the given polarity term lists.
    pub fn new(
        positive: impl IntoIterator<Item = String>,
        negative: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
        }
    }

    /// Builds a model over the bundled polarity lists.
    pub fn built_in() -> Self {
        Self::new(
            wordlist::parse_entries(BUILT_IN_POSITIVE).map(str::to_string),
            wordlist::parse_entries(BUILT_IN_NEGATIVE).map(str::to_string),
        )
    }

    /// Loads polarity lists from files, one term per line.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when either file cannot be read.
    pub fn from_files(positive: &Path, negative: &Path) -> Result<Self, AppError> {
        Ok(Self::new(
            wordlist::load_entries(positive)?,
            wordlist::load_entries(negative)?,
        ))
    }

    fn occurrences(terms: &[String], content: &str) -> usize {
        terms
            .iter()
            .map(|term| content.matches(term.as_str()).count())
            .sum()
    }
}

impl SentimentModel for LexiconSentimentModel {
    fn score(&self, content: &str) -> f64 {
        let positive = Self::occurrences(&self.positive, content);
        let negative = Self::occurrences(&self.negative, content);
        let total = positive + negative;
        if total == 0 {
            return 0.5;
        }

        let balance = (positive as f64 - negative as f64) / total as f64;
        (0.5 + 0.5 * balance).clamp(0.0, 1.0)
    }
}
