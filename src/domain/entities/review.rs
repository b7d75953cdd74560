//! Review entities produced by collection and analysis.

use chrono::NaiveDate;

/// A review as scraped from the rendered page, before any processing.
///
/// Ephemeral: owned by the collector during a single run and consumed by the
/// analysis stage.
#[derive(Debug, Clone)]
pub struct RawReview {
    /// The publish-date string exactly as it appears on the page,
    /// e.g. `发布于：8 月 15 日` or `Posted: 2023 年 1 月 2 日`.
    pub publish_date_raw: String,
    /// Concatenated card text with literal tab/newline characters stripped.
    pub content_raw: String,
}

/// Polarity bucket for a scored review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// Buckets a sentiment score. The 0.5 boundary is inclusive on the
    /// positive side.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// A fully processed review. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Review {
    pub publish_date: NaiveDate,
    pub content: String,
    pub tokens: Vec<String>,
    /// Sentiment score in `[0, 1]`; 0 is most negative, 1 most positive.
    pub sentiment: f64,
    pub sentiment_label: SentimentLabel,
}

impl Review {
    /// Creates a review; the label is derived from the score.
    pub fn new(
        publish_date: NaiveDate,
        content: String,
        tokens: Vec<String>,
        sentiment: f64,
    ) -> Self {
        Self {
            publish_date,
            content,
            tokens,
            sentiment,
            sentiment_label: SentimentLabel::from_score(sentiment),
        }
    }
}
