//! Sentiment model implementations.

pub mod lexicon_model;

pub use lexicon_model::LexiconSentimentModel;
