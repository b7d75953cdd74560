//! Application error taxonomy.
//!
//! Errors are split by how the pipeline reacts to them:
//!
//! - [`AppError::Render`] is fatal for a collection run; partial results are
//!   discarded.
//! - [`AppError::DateFormat`] and [`AppError::MissingContent`] are
//!   per-record conditions; the analysis stage skips the offending record
//!   and logs it.
//! - [`AppError::Validation`] covers bad configuration or CLI input.
//! - [`AppError::Internal`] is everything else.

use thiserror::Error;

/// Top-level error type for the review mining pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    /// The page renderer could not reach the target resource or returned a
    /// document the extractor cannot work with.
    #[error("Page renderer failure: {message}")]
    Render { message: String },

    /// A publish-date string matched none of the known date patterns.
    #[error("Unrecognized date format: {raw:?}")]
    DateFormat { raw: String },

    /// A review card carried no extractable text after trimming.
    #[error("Review card has no extractable text")]
    MissingContent,

    /// Invalid configuration or user input.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Unexpected internal failure.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    pub fn date_format(raw: impl Into<String>) -> Self {
        Self::DateFormat { raw: raw.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        Self::render(e.to_string())
    }
}
