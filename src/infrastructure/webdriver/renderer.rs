//! HTTP client for the WebDriver wire protocol.
//!
//! Talks JSON over HTTP to a driver endpoint (chromedriver, geckodriver or
//! a Selenium hub speaking the W3C dialect). Only the four commands the
//! collection loop needs are implemented: navigate, execute-script (for
//! scrolling), page source, and session teardown.

use crate::domain::capabilities::PageRenderer;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing::{debug, info};

/// A live WebDriver session implementing [`PageRenderer`].
pub struct WebDriverRenderer {
    http: reqwest::Client,
    base_url: String,
    session_id: String,
}

impl WebDriverRenderer {
    /// Opens a headless browser session against a driver endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the driver is unreachable, rejects
    /// the session request, or answers without a session id.
    pub async fn connect(webdriver_url: &str) -> Result<Self, AppError> {
        info!(url = webdriver_url, "connecting to WebDriver endpoint");

        let http = reqwest::Client::new();
        let base_url = webdriver_url.trim_end_matches('/').to_string();
        let capabilities = json!({
            "capabilities": {
                "alwaysMatch": {
                    "goog:chromeOptions": {
                        "args": ["--headless=new", "--disable-gpu", "--no-sandbox"]
                    }
                }
            }
        });

        let response = http
            .post(format!("{base_url}/session"))
            .json(&capabilities)
            .send()
            .await?;
        let payload = decode_driver_payload(response.status(), response.json().await?)?;
        let session_id = extract_session_id(&payload)?;
        info!(session_id, "WebDriver session established");

        Ok(Self {
            http,
            base_url,
            session_id,
        })
    }

    async fn command(&self, path: &str, body: Value) -> Result<Value, AppError> {
        let url = format!("{}/session/{}/{path}", self.base_url, self.session_id);
        let response = self.http.post(url).json(&body).send().await?;
        decode_driver_payload(response.status(), response.json().await?)
    }
}

#[async_trait]
impl PageRenderer for WebDriverRenderer {
    async fn navigate(&self, url: &str) -> Result<(), AppError> {
        debug!(url, "navigating");
        self.command("url", json!({ "url": url })).await?;
        Ok(())
    }

    async fn scroll_to_bottom(&self) -> Result<(), AppError> {
        self.command(
            "execute/sync",
            json!({
                "script": "window.scrollTo(0, document.body.scrollHeight);",
                "args": [],
            }),
        )
        .await?;
        Ok(())
    }

    async fn rendered_document(&self) -> Result<String, AppError> {
        let url = format!("{}/session/{}/source", self.base_url, self.session_id);
        let response = self.http.get(url).send().await?;
        let payload = decode_driver_payload(response.status(), response.json().await?)?;
        extract_document(&payload)
    }

    async fn close(&self) -> Result<(), AppError> {
        let url = format!("{}/session/{}", self.base_url, self.session_id);
        let response = self.http.delete(url).send().await?;
        decode_driver_payload(response.status(), response.json().await?)?;
        debug!(session_id = %self.session_id, "session closed");
        Ok(())
    }
}

/// Maps a driver response to its payload, surfacing protocol-level errors.
///
/// Driver errors arrive as a non-2xx status with a `value.message` field
/// describing the failure.
fn decode_driver_payload(status: StatusCode, payload: Value) -> Result<Value, AppError> {
    if status.is_success() {
        return Ok(payload);
    }

    let message = payload
        .pointer("/value/message")
        .and_then(Value::as_str)
        .unwrap_or("no error message");
    Err(AppError::render(format!("driver returned {status}: {message}")))
}

fn extract_session_id(payload: &Value) -> Result<String, AppError> {
    payload
        .pointer("/value/sessionId")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::render("session response carried no session id"))
}

fn extract_document(payload: &Value) -> Result<String, AppError> {
    payload
        .pointer("/value")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::render("source response carried no document"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_passes_payload_through() {
        let payload = json!({ "value": null });
        let result = decode_driver_payload(StatusCode::OK, payload.clone()).unwrap();
        assert_eq!(result, payload);
    }

    #[test]
    fn test_decode_error_surfaces_driver_message() {
        let payload = json!({
            "value": { "error": "invalid session id", "message": "session deleted" }
        });

        let err = decode_driver_payload(StatusCode::NOT_FOUND, payload).unwrap_err();

        assert!(matches!(err, AppError::Render { .. }));
        assert!(err.to_string().contains("session deleted"));
    }

    #[test]
    fn test_decode_error_without_message_field() {
        let err = decode_driver_payload(StatusCode::INTERNAL_SERVER_ERROR, json!({}))
            .unwrap_err();

        assert!(err.to_string().contains("no error message"));
    }

    #[test]
    fn test_extract_session_id() {
        let payload = json!({ "value": { "sessionId": "abc123", "capabilities": {} } });
        assert_eq!(extract_session_id(&payload).unwrap(), "abc123");
    }

    #[test]
    fn test_extract_session_id_missing() {
        let result = extract_session_id(&json!({ "value": {} }));
        assert!(matches!(result, Err(AppError::Render { .. })));
    }

    #[test]
    fn test_extract_document() {
        let payload = json!({ "value": "<html></html>" });
        assert_eq!(extract_document(&payload).unwrap(), "<html></html>");
    }

    #[test]
    fn test_extract_document_non_string_value() {
        let result = extract_document(&json!({ "value": 42 }));
        assert!(matches!(result, Err(AppError::Render { .. })));
    }
}
