//! # Review Miner
//!
//! Collects user reviews from a store product page with an automated
//! browser and mines them for word frequencies and sentiment trends.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Review entities and capability traits
//! - **Application Layer** ([`application`]) - Pipeline stage services
//! - **Infrastructure Layer** ([`infrastructure`]) - WebDriver client and
//!   lexicon-backed NLP implementations
//! - **Utils** ([`utils`]) - Pure helpers: date normalization, tokenization,
//!   frequency ranking, sentiment grouping
//!
//! ## Pipeline
//!
//! 1. Scroll the review page until the rendered card count stops growing
//! 2. Extract raw date/text pairs from the rendered markup
//! 3. Normalize dates, tokenize the text, score sentiment per review
//! 4. Report the top-N word ranking and the per-date mean sentiment
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a WebDriver endpoint, e.g. chromedriver --port=9515
//! export WEBDRIVER_URL="http://localhost:9515"
//!
//! # Mine the reviews of an app
//! cargo run -- 413410
//! ```
//!
//! ## Configuration
//!
//! Pipeline configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalysisService, CollectorService, ReportService};
    pub use crate::domain::capabilities::{PageRenderer, SentimentModel, WordSegmenter};
    pub use crate::domain::entities::{RawReview, Review, SentimentLabel};
    pub use crate::error::AppError;
}
