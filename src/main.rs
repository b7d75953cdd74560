//! Review mining pipeline binary.
//!
//! Wires the WebDriver renderer and the lexicon-backed NLP components into
//! the collection and analysis services, then prints the textual report.
//!
//! # Usage
//!
//! ```bash
//! # Mine reviews for an app with the defaults
//! cargo run -- 413410
//!
//! # Cap scrolling and widen the ranking
//! cargo run -- 413410 --max-scrolls 10 --top-words 50
//! ```
//!
//! # Environment Variables
//!
//! See [`review_miner::config`] for the full list; the most relevant is
//! `WEBDRIVER_URL`, pointing at a running chromedriver or Selenium hub.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use review_miner::application::services::{AnalysisService, CollectorService, ReportService};
use review_miner::config::{self, Config};
use review_miner::infrastructure::segmentation::FmmSegmenter;
use review_miner::infrastructure::sentiment::LexiconSentimentModel;
use review_miner::infrastructure::stopwords;
use review_miner::infrastructure::webdriver::WebDriverRenderer;
use review_miner::utils::markup::CardExtractor;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// CSS class carrying a review card's text block.
const CARD_CONTENT_CLASS: &str = "apphub_CardTextContent";
/// CSS class carrying the card's publish date.
const CARD_DATE_CLASS: &str = "date_posted";

/// Mines a store app's review page for word frequencies and sentiment.
#[derive(Parser)]
#[command(name = "review-miner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Store app id whose review page is mined
    app_id: u32,

    /// Override the scroll iteration cap
    #[arg(long)]
    max_scrolls: Option<usize>,

    /// Override the review language filter
    #[arg(long)]
    language: Option<String>,

    /// Override the ranking size in the report
    #[arg(long)]
    top_words: Option<usize>,

    /// Override the stopword list file
    #[arg(long, value_name = "PATH")]
    stopwords: Option<PathBuf>,

    /// Override the segmentation dictionary file
    #[arg(long, value_name = "PATH")]
    lexicon: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(max_scrolls) = cli.max_scrolls {
        config.max_scrolls = max_scrolls;
    }
    if let Some(language) = cli.language {
        config.review_language = language;
    }
    if let Some(top_words) = cli.top_words {
        config.top_words = top_words;
    }
    if let Some(stopwords) = cli.stopwords {
        config.stopwords_path = Some(stopwords);
    }
    if let Some(lexicon) = cli.lexicon {
        config.lexicon_path = Some(lexicon);
    }
    // CLI overrides go through the same checks as the environment.
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    let stopword_set = match &config.stopwords_path {
        Some(path) => stopwords::from_file(path)?,
        None => stopwords::built_in(),
    };
    let segmenter = Arc::new(match &config.lexicon_path {
        Some(path) => FmmSegmenter::from_file(path)?,
        None => FmmSegmenter::built_in(),
    });
    let sentiment_model = Arc::new(
        match (
            &config.sentiment_positive_path,
            &config.sentiment_negative_path,
        ) {
            (Some(positive), Some(negative)) => {
                LexiconSentimentModel::from_files(positive, negative)?
            }
            _ => LexiconSentimentModel::built_in(),
        },
    );

    let renderer = Arc::new(
        WebDriverRenderer::connect(&config.webdriver_url)
            .await
            .context("Failed to open WebDriver session")?,
    );
    let extractor = CardExtractor::new(CARD_CONTENT_CLASS, CARD_DATE_CLASS)?;
    let collector = CollectorService::new(
        renderer,
        extractor,
        config.store_base_url.clone(),
        Duration::from_millis(config.scroll_wait_ms),
    );

    let raw_reviews = collector
        .collect(cli.app_id, &config.review_language, config.max_scrolls)
        .await
        .context("Review collection failed")?;

    let analysis = AnalysisService::new(
        segmenter,
        sentiment_model,
        stopword_set,
        config.reference_year,
    );
    let reviews = analysis.analyze(raw_reviews);

    let report = ReportService::new(config.top_words).render(&reviews);

    println!();
    println!(
        "{}",
        format!("Review report for app {}", cli.app_id)
            .bright_blue()
            .bold()
    );
    println!();
    println!("{report}");

    Ok(())
}

/// Initializes the tracing subscriber in the configured format.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
