#![allow(dead_code)]

use async_trait::async_trait;
use review_miner::error::AppError;
use review_miner::prelude::PageRenderer;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// CSS classes matching the store's review-card markup.
pub const CARD_CONTENT_CLASS: &str = "apphub_CardTextContent";
pub const CARD_DATE_CLASS: &str = "date_posted";

/// Renders a single review card in the markup shape the extractor expects.
pub fn card(date: &str, body: &str) -> String {
    format!(
        "<div class=\"apphub_CardTextContent\">\
         <div class=\"date_posted\">{date}</div>\
         {body}</div></div>"
    )
}

/// Renders a document containing `n` distinct cards.
pub fn document_with_cards(n: usize) -> String {
    let cards: String = (0..n)
        .map(|i| card("发布于：8 月 15 日", &format!("评论{i}")))
        .collect();
    format!("<html><body>{cards}</body></html>")
}

/// Wraps pre-rendered cards into a full document.
pub fn document_of(cards: &[String]) -> String {
    format!("<html><body>{}</body></html>", cards.concat())
}

/// Scripted [`PageRenderer`]: serves a fixed sequence of documents and
/// records how the collector drives the session.
///
/// Each `rendered_document` call pops the next scripted document; once only
/// one remains it is served repeatedly, which models a page that stopped
/// loading new content.
pub struct FakeRenderer {
    documents: Mutex<Vec<String>>,
    navigation_failures: AtomicUsize,
    pub navigate_calls: AtomicUsize,
    pub scroll_calls: AtomicUsize,
    pub close_calls: AtomicUsize,
}

impl FakeRenderer {
    pub fn serving(documents: Vec<String>) -> Self {
        Self {
            documents: Mutex::new(documents),
            navigation_failures: AtomicUsize::new(0),
            navigate_calls: AtomicUsize::new(0),
            scroll_calls: AtomicUsize::new(0),
            close_calls: AtomicUsize::new(0),
        }
    }

    /// Makes the first `n` navigate calls fail.
    pub fn failing_navigation(self, n: usize) -> Self {
        self.navigation_failures.store(n, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl PageRenderer for FakeRenderer {
    async fn navigate(&self, _url: &str) -> Result<(), AppError> {
        self.navigate_calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.navigation_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.navigation_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(AppError::render("scripted navigation failure"));
        }
        Ok(())
    }

    async fn scroll_to_bottom(&self) -> Result<(), AppError> {
        self.scroll_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rendered_document(&self) -> Result<String, AppError> {
        let mut documents = self.documents.lock().unwrap();
        match documents.len() {
            0 => Err(AppError::render("scripted renderer ran out of documents")),
            1 => Ok(documents[0].clone()),
            _ => Ok(documents.remove(0)),
        }
    }

    async fn close(&self) -> Result<(), AppError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
