//! Infrastructure layer for external integrations.
//!
//! This layer implements the capability traits defined by the domain layer,
//! providing concrete implementations for page rendering and the NLP
//! lexicons.
//!
//! # Modules
//!
//! - [`webdriver`] - WebDriver protocol client implementing [`crate::domain::capabilities::PageRenderer`]
//! - [`segmentation`] - forward-maximum-matching word segmenter
//! - [`sentiment`] - polarity-wordlist sentiment model
//! - [`stopwords`] - stopword list loading

pub mod segmentation;
pub mod sentiment;
pub mod stopwords;
pub mod webdriver;

mod wordlist;
