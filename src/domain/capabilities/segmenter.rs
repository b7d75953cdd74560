//! Capability trait for language-specific word segmentation.

/// Splits a run of target-script text into word tokens.
///
/// The input has already been collapsed to target-script characters only
/// (no whitespace or punctuation), so implementations must segment purely
/// from lexical knowledge.
///
/// # Implementations
///
/// - [`crate::infrastructure::segmentation::FmmSegmenter`] -
///   forward-maximum-matching over a word list
#[cfg_attr(test, mockall::automock)]
pub trait WordSegmenter: Send + Sync {
    /// Segments `text` into tokens, preserving input order. Characters not
    /// covered by the segmenter's lexicon come back as single-character
    /// tokens rather than being dropped.
    fn segment(&self, text: &str) -> Vec<String>;
}
