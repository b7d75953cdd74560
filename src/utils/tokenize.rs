//! Review-text cleanup and tokenization.
//!
//! The pipeline treats CJK unified ideographs (U+4E00..=U+9FFF) as the
//! target script; everything else is noise. Collapsing removes whitespace
//! and punctuation entirely, which merges words that were separated by
//! removed characters. This is a lossy but intentional simplification that
//! keeps segmentation purely lexical.

use crate::domain::capabilities::WordSegmenter;
use std::collections::HashSet;

/// Inclusive Unicode range of the target script.
const TARGET_SCRIPT: std::ops::RangeInclusive<char> = '\u{4e00}'..='\u{9fff}';

/// Collapses `content` to target-script characters only.
pub fn retain_target_script(content: &str) -> String {
    content.chars().filter(|c| TARGET_SCRIPT.contains(c)).collect()
}

/// Tokenizes review content.
///
/// Steps: collapse to target-script characters, segment via the provided
/// [`WordSegmenter`], then drop stopwords (case-sensitive exact match) and
/// tokens of a single character. Order is preserved from the segmenter
/// output and duplicates are kept so frequency counting downstream sees
/// every occurrence.
pub fn tokenize(
    content: &str,
    segmenter: &dyn WordSegmenter,
    stopwords: &HashSet<String>,
) -> Vec<String> {
    let collapsed = retain_target_script(content);
    segmenter
        .segment(&collapsed)
        .into_iter()
        .filter(|token| token.chars().count() > 1 && !stopwords.contains(token))
        .collect()
}
