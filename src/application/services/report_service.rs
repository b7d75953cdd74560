//! Textual report assembly.

use crate::domain::entities::Review;
use crate::utils::frequency::top_n;
use crate::utils::sentiment_stats::{label_counts, mean_by_date};

/// Assembles the end-of-run report.
///
/// Returns a plain string with the label counts, the top-N word ranking,
/// and the per-date mean sentiment table. Printing and terminal styling
/// stay in the binary so tests can assert on the exact content.
pub struct ReportService {
    top_words: usize,
}

impl ReportService {
    /// Creates a report service that ranks at most `top_words` tokens.
    pub fn new(top_words: usize) -> Self {
        Self { top_words }
    }

    /// Renders the report for an analyzed corpus.
    pub fn render(&self, reviews: &[Review]) -> String {
        if reviews.is_empty() {
            return "No reviews collected.\n".to_string();
        }

        let (positive, negative) = label_counts(reviews);
        let ranking = top_n(
            reviews
                .iter()
                .flat_map(|r| r.tokens.iter().map(String::as_str)),
            self.top_words,
        );

        let mut out = String::new();
        out.push_str(&format!(
            "Reviews: {} ({positive} positive, {negative} negative)\n",
            reviews.len()
        ));

        out.push_str(&format!("\nTop {} words:\n", ranking.len()));
        for (token, count) in &ranking {
            out.push_str(&format!("  {token} {count}\n"));
        }

        out.push_str("\nMean sentiment by date:\n");
        for (date, mean) in mean_by_date(reviews) {
            out.push_str(&format!("  {date}  {mean:.3}\n"));
        }

        out
    }
}
