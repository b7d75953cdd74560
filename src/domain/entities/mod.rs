//! Domain entities for collected reviews.

pub mod review;

pub use review::{RawReview, Review, SentimentLabel};
