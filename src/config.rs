//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! pipeline runs. CLI flags in the binary override individual fields after
//! loading.
//!
//! ## Variables
//!
//! All variables are optional; the defaults target a local chromedriver and
//! the public store front.
//!
//! - `WEBDRIVER_URL` - Driver endpoint (default: `http://localhost:9515`)
//! - `STORE_BASE_URL` - Store front base URL (default: `https://steamcommunity.com`)
//! - `REVIEW_LANGUAGE` - Review language filter (default: `schinese`)
//! - `MAX_SCROLLS` - Scroll iteration cap (default: 50, max: 1000)
//! - `SCROLL_WAIT_MS` - Wait after each scroll for lazy content (default: 1000)
//! - `TOP_WORDS` - Ranking size in the report (default: 20)
//! - `REFERENCE_YEAR` - Year completing year-less dates (default: current year)
//! - `STOPWORDS_PATH` - Stopword list file (default: bundled list)
//! - `LEXICON_PATH` - Segmentation dictionary file (default: bundled list)
//! - `SENTIMENT_POSITIVE_PATH` / `SENTIMENT_NEGATIVE_PATH` - Polarity lists,
//!   set both or neither (default: bundled lists)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use chrono::Datelike;
use std::env;
use std::path::PathBuf;

/// Pipeline configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub webdriver_url: String,
    pub store_base_url: String,
    pub review_language: String,
    pub max_scrolls: usize,
    pub scroll_wait_ms: u64,
    pub top_words: usize,
    /// Completes publish dates whose source text carries no year field.
    pub reference_year: i32,
    pub stopwords_path: Option<PathBuf>,
    pub lexicon_path: Option<PathBuf>,
    pub sentiment_positive_path: Option<PathBuf>,
    pub sentiment_negative_path: Option<PathBuf>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let webdriver_url =
            env::var("WEBDRIVER_URL").unwrap_or_else(|_| "http://localhost:9515".to_string());
        let store_base_url =
            env::var("STORE_BASE_URL").unwrap_or_else(|_| "https://steamcommunity.com".to_string());
        let review_language =
            env::var("REVIEW_LANGUAGE").unwrap_or_else(|_| "schinese".to_string());

        let max_scrolls = env::var("MAX_SCROLLS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        let scroll_wait_ms = env::var("SCROLL_WAIT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let top_words = env::var("TOP_WORDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let reference_year = env::var("REFERENCE_YEAR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| chrono::Local::now().year());

        let stopwords_path = env::var("STOPWORDS_PATH").ok().map(PathBuf::from);
        let lexicon_path = env::var("LEXICON_PATH").ok().map(PathBuf::from);
        let sentiment_positive_path = env::var("SENTIMENT_POSITIVE_PATH").ok().map(PathBuf::from);
        let sentiment_negative_path = env::var("SENTIMENT_NEGATIVE_PATH").ok().map(PathBuf::from);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            webdriver_url,
            store_base_url,
            review_language,
            max_scrolls,
            scroll_wait_ms,
            top_words,
            reference_year,
            stopwords_path,
            lexicon_path,
            sentiment_positive_path,
            sentiment_negative_path,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `webdriver_url` or `store_base_url` is not an HTTP(S) URL
    /// - `max_scrolls` is 0 or above 1000
    /// - `scroll_wait_ms` is below 100 or above 60000
    /// - `top_words` is 0
    /// - only one of the sentiment list paths is set
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.webdriver_url.starts_with("http://") && !self.webdriver_url.starts_with("https://")
        {
            anyhow::bail!(
                "WEBDRIVER_URL must start with 'http://' or 'https://', got '{}'",
                self.webdriver_url
            );
        }

        if !self.store_base_url.starts_with("http://")
            && !self.store_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "STORE_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.store_base_url
            );
        }

        if self.max_scrolls == 0 || self.max_scrolls > 1000 {
            anyhow::bail!(
                "MAX_SCROLLS must be between 1 and 1000, got {}",
                self.max_scrolls
            );
        }

        if self.scroll_wait_ms < 100 || self.scroll_wait_ms > 60_000 {
            anyhow::bail!(
                "SCROLL_WAIT_MS must be between 100 and 60000, got {}",
                self.scroll_wait_ms
            );
        }

        if self.top_words == 0 {
            anyhow::bail!("TOP_WORDS must be at least 1");
        }

        if self.sentiment_positive_path.is_some() != self.sentiment_negative_path.is_some() {
            anyhow::bail!(
                "SENTIMENT_POSITIVE_PATH and SENTIMENT_NEGATIVE_PATH must be set together"
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  WebDriver endpoint: {}", self.webdriver_url);
        tracing::info!("  Store base URL: {}", self.store_base_url);
        tracing::info!("  Review language: {}", self.review_language);
        tracing::info!("  Max scrolls: {}", self.max_scrolls);
        tracing::info!("  Scroll wait: {}ms", self.scroll_wait_ms);
        tracing::info!("  Top words: {}", self.top_words);
        tracing::info!("  Reference year: {}", self.reference_year);

        match &self.stopwords_path {
            Some(path) => tracing::info!("  Stopwords: {}", path.display()),
            None => tracing::info!("  Stopwords: bundled"),
        }
        match &self.lexicon_path {
            Some(path) => tracing::info!("  Lexicon: {}", path.display()),
            None => tracing::info!("  Lexicon: bundled"),
        }
        match &self.sentiment_positive_path {
            Some(path) => tracing::info!("  Sentiment lists: {} (+negative)", path.display()),
            None => tracing::info!("  Sentiment lists: bundled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
