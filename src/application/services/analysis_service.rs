//! Review normalization, tokenization, and sentiment scoring.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::capabilities::{SentimentModel, WordSegmenter};
use crate::domain::entities::{RawReview, Review};
use crate::utils::date_normalizer::normalize_date;
use crate::utils::tokenize::tokenize;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Turns raw scraped reviews into scored [`Review`]s.
///
/// Per-record failures skip the record with a warning instead of failing
/// the run: a review with no extractable text or an unrecognized date is
/// logged and dropped. The growth-only scroll check can re-extract
/// overlapping card sets, so duplicates by `(publish_date, content)`
/// collapse onto the first occurrence.
pub struct AnalysisService<S: WordSegmenter, M: SentimentModel> {
    segmenter: Arc<S>,
    sentiment_model: Arc<M>,
    stopwords: HashSet<String>,
    reference_year: i32,
}

impl<S: WordSegmenter, M: SentimentModel> AnalysisService<S, M> {
    /// Creates a new analysis service.
    ///
    /// `reference_year` completes publish dates whose source text carries
    /// no year field.
    pub fn new(
        segmenter: Arc<S>,
        sentiment_model: Arc<M>,
        stopwords: HashSet<String>,
        reference_year: i32,
    ) -> Self {
        Self {
            segmenter,
            sentiment_model,
            stopwords,
            reference_year,
        }
    }

    /// Processes raw reviews into the analyzed corpus, preserving
    /// discovery order.
    pub fn analyze(&self, raw_reviews: Vec<RawReview>) -> Vec<Review> {
        let total = raw_reviews.len();
        let mut seen: HashSet<(NaiveDate, String)> = HashSet::new();
        let mut reviews = Vec::with_capacity(total);

        for raw in raw_reviews {
            let content = raw.content_raw.trim();
            if content.is_empty() {
                warn!(date = %raw.publish_date_raw, "skipping review without content");
                continue;
            }

            let publish_date = match normalize_date(&raw.publish_date_raw, self.reference_year) {
                Ok(date) => date,
                Err(e) => {
                    warn!(error = %e, "skipping review");
                    continue;
                }
            };

            if !seen.insert((publish_date, content.to_string())) {
                debug!(%publish_date, "dropping duplicate review");
                continue;
            }

            let tokens = tokenize(content, self.segmenter.as_ref(), &self.stopwords);
            let sentiment = self.sentiment_model.score(content);
            reviews.push(Review::new(
                publish_date,
                content.to_string(),
                tokens,
                sentiment,
            ));
        }

        debug!(total, kept = reviews.len(), "analysis finished");
        reviews
    }
}
