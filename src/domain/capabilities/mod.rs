//! Capability trait definitions for the domain layer.
//!
//! These traits abstract the external collaborators the pipeline depends on:
//! the browser-driving page renderer, the word segmenter, and the sentiment
//! model. Concrete implementations live in `crate::infrastructure`; mocks
//! are auto-generated via `mockall` for testing.
//!
//! # Available Capabilities
//!
//! - [`PageRenderer`] - drives a real browser session
//! - [`WordSegmenter`] - language-specific word segmentation
//! - [`SentimentModel`] - scores review text in `[0, 1]`

pub mod page_renderer;
pub mod segmenter;
pub mod sentiment_model;

pub use page_renderer::PageRenderer;
pub use segmenter::WordSegmenter;
pub use sentiment_model::SentimentModel;

#[cfg(test)]
pub use page_renderer::MockPageRenderer;
#[cfg(test)]
pub use segmenter::MockWordSegmenter;
#[cfg(test)]
pub use sentiment_model::MockSentimentModel;
