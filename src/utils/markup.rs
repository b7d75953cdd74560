//! Review-card extraction from rendered store markup.
//!
//! A review card is expected to render as a content block carrying the
//! configured content class, whose first child is the date block:
//!
//! ```html
//! <div class="apphub_CardTextContent">
//!   <div class="date_posted">发布于：8 月 15 日</div>
//!   review text, possibly with inline markup
//! </div>
//! </div>
//! ```
//!
//! Extraction is regex-based over the serialized document, not a DOM walk.
//! The card pattern anchors on the two class attributes and the pair of
//! closing tags, which is stable for the store's card markup but makes no
//! attempt to parse arbitrary HTML.

use crate::domain::entities::RawReview;
use crate::error::AppError;
use regex::Regex;

/// Locates review cards in a rendered document and extracts their raw
/// date and text fields.
pub struct CardExtractor {
    card: Regex,
    tag: Regex,
}

impl CardExtractor {
    /// Compiles the card pattern for the given CSS class names.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the class names produce an invalid
    /// pattern; escaped class names never do, so this only fires on regex
    /// size limits.
    pub fn new(content_class: &str, date_class: &str) -> Result<Self, AppError> {
        let pattern = format!(
            r#"(?s)<div[^>]*class="[^"]*{content}[^"]*"[^>]*>\s*<div[^>]*class="[^"]*{date}[^"]*"[^>]*>(?P<date>[^<]*)</div>(?P<body>.*?)</div>\s*</div>"#,
            content = regex::escape(content_class),
            date = regex::escape(date_class),
        );
        let card = Regex::new(&pattern)
            .map_err(|e| AppError::internal(format!("card pattern failed to compile: {e}")))?;
        let tag = Regex::new(r"<[^>]+>")
            .map_err(|e| AppError::internal(format!("tag pattern failed to compile: {e}")))?;
        Ok(Self { card, tag })
    }

    /// Counts review cards currently present in `document`.
    ///
    /// Used by the scroll loop as its growth signal, so it deliberately
    /// counts with the same pattern [`Self::extract`] extracts with.
    pub fn count_cards(&self, document: &str) -> usize {
        self.card.find_iter(document).count()
    }

    /// Extracts every card into a [`RawReview`].
    ///
    /// The body has inline tags stripped and literal tab/newline characters
    /// removed; surrounding whitespace is trimmed. Cards whose body comes
    /// out empty are still returned, the pipeline drops them later where
    /// the skip can be logged alongside date-format skips.
    pub fn extract(&self, document: &str) -> Vec<RawReview> {
        self.card
            .captures_iter(document)
            .map(|caps| {
                let body = self.tag.replace_all(&caps["body"], " ");
                let content: String = body.chars().filter(|c| *c != '\t' && *c != '\n').collect();
                RawReview {
                    publish_date_raw: caps["date"].trim().to_string(),
                    content_raw: content.trim().to_string(),
                }
            })
            .collect()
    }
}
