//! WebDriver-backed page rendering.

pub mod renderer;

pub use renderer::WebDriverRenderer;
