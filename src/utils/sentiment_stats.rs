//! Per-date sentiment aggregation.

use crate::domain::entities::{Review, SentimentLabel};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Computes the arithmetic mean sentiment score for each publish date.
///
/// The result is keyed in ascending date order, which makes the time-series
/// output deterministic without a separate sort step.
pub fn mean_by_date(reviews: &[Review]) -> BTreeMap<NaiveDate, f64> {
    let mut accumulated: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for review in reviews {
        let entry = accumulated.entry(review.publish_date).or_insert((0.0, 0));
        entry.0 += review.sentiment;
        entry.1 += 1;
    }

    accumulated
        .into_iter()
        .map(|(date, (sum, count))| (date, sum / count as f64))
        .collect()
}

/// Counts reviews by sentiment label, returning `(positive, negative)`.
pub fn label_counts(reviews: &[Review]) -> (usize, usize) {
    reviews.iter().fold((0, 0), |(pos, neg), review| {
        match review.sentiment_label {
            SentimentLabel::Positive => (pos + 1, neg),
            SentimentLabel::Negative => (pos, neg + 1),
        }
    })
}
