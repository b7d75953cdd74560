//! Capability trait for driving a rendered browser page.

use crate::error::AppError;
use async_trait::async_trait;

/// Interface to a browser session that can render script-driven pages.
///
/// Exactly one session is held per collection run. The collector guarantees
/// that [`PageRenderer::close`] runs on every exit path (success, early
/// convergence, or failure) before downstream processing starts.
///
/// # Implementations
///
/// - [`crate::infrastructure::webdriver::WebDriverRenderer`] - WebDriver
///   protocol client over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Navigates the session to the given URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the target resource is unreachable.
    async fn navigate(&self, url: &str) -> Result<(), AppError>;

    /// Scrolls the document to its bottom, triggering lazy content loads.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if script execution fails.
    async fn scroll_to_bottom(&self) -> Result<(), AppError>;

    /// Returns the current rendered document markup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the source cannot be fetched.
    async fn rendered_document(&self) -> Result<String, AppError>;

    /// Releases the browser session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the session cannot be released;
    /// callers treat this as non-fatal and log it.
    async fn close(&self) -> Result<(), AppError>;
}
