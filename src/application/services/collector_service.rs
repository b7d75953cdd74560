//! Scroll-driven review collection service.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::capabilities::PageRenderer;
use crate::domain::entities::RawReview;
use crate::error::AppError;
use crate::utils::markup::CardExtractor;
use crate::utils::scroll_progress::{self, ScrollDecision};
use tokio_retry::RetryIf;
use tokio_retry::strategy::ExponentialBackoff;
use tracing::{debug, info, warn};
use url::Url;

/// Collects raw reviews from a store product page.
///
/// Drives the renderer's scroll loop until the rendered card count stops
/// growing (or `max_iterations` is reached), then extracts raw reviews from
/// the last document that grew. The renderer session is released on every
/// exit path.
pub struct CollectorService<R: PageRenderer> {
    renderer: Arc<R>,
    extractor: CardExtractor,
    base_url: String,
    scroll_wait: Duration,
}

impl<R: PageRenderer> CollectorService<R> {
    /// Creates a new collector service.
    pub fn new(
        renderer: Arc<R>,
        extractor: CardExtractor,
        base_url: impl Into<String>,
        scroll_wait: Duration,
    ) -> Self {
        Self {
            renderer,
            extractor,
            base_url: base_url.into(),
            scroll_wait,
        }
    }

    /// Builds and validates the review-page URL for an app id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the configured base URL does not
    /// parse or cannot carry a path.
    pub fn review_page_url(&self, app_id: u32, language: &str) -> Result<String, AppError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            AppError::validation(format!("invalid store base URL {:?}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                AppError::validation(format!(
                    "store base URL {:?} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["app", &app_id.to_string(), "reviews", ""]);
        url.query_pairs_mut()
            .append_pair("browsefilter", "toprated")
            .append_pair("filterLanguage", language);
        Ok(url.into())
    }

    /// Collects the reviews visible after scrolling the page to exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] when the renderer is unreachable or the
    /// navigation keeps failing after retries. Partial results are
    /// discarded on failure.
    pub async fn collect(
        &self,
        app_id: u32,
        language: &str,
        max_iterations: usize,
    ) -> Result<Vec<RawReview>, AppError> {
        let url = self.review_page_url(app_id, language)?;
        info!(app_id, %url, "collecting reviews");

        let result = self.collect_inner(&url, max_iterations).await;

        // The session must be released on success, early stop, and failure
        // alike; a close failure is logged but never masks the result.
        if let Err(e) = self.renderer.close().await {
            warn!(error = %e, "failed to close renderer session");
        }

        result
    }

    async fn collect_inner(
        &self,
        url: &str,
        max_iterations: usize,
    ) -> Result<Vec<RawReview>, AppError> {
        self.navigate_with_retry(url).await?;

        let mut best_document = self.renderer.rendered_document().await?;
        let mut best_count = self.extractor.count_cards(&best_document);
        debug!(cards = best_count, "initial render");

        for iteration in 0..max_iterations {
            self.renderer.scroll_to_bottom().await?;
            tokio::time::sleep(self.scroll_wait).await;

            let document = self.renderer.rendered_document().await?;
            let observed = self.extractor.count_cards(&document);
            let (next_best, decision) = scroll_progress::advance(best_count, observed);
            debug!(iteration, cards = observed, "scrolled");

            if observed > best_count {
                best_document = document;
            }
            best_count = next_best;

            if decision == ScrollDecision::Stop {
                debug!(iteration, cards = best_count, "card count stopped growing");
                break;
            }
        }

        let reviews = self.extractor.extract(&best_document);
        info!(reviews = reviews.len(), "collection finished");
        Ok(reviews)
    }

    /// Retries the initial navigation with exponential backoff (250ms then
    /// 2.5s, three attempts total). Every later renderer call fails fast.
    async fn navigate_with_retry(&self, url: &str) -> Result<(), AppError> {
        let backoff = ExponentialBackoff::from_millis(10).factor(25).take(2);
        RetryIf::spawn(
            backoff,
            || self.renderer.navigate(url),
            |e: &AppError| {
                warn!(error = %e, "navigation failed, retrying");
                true
            },
        )
        .await
    }
}
