//! Outbound HTTP clients.
//!
//! - [`backend::BackendClient`] -- forwards proxy calls to the item backend.
//! - [`gemini::GeminiClient`] -- server-keyed summary generation.
//!
//! Both share one [`reqwest::Client`] built by [`build_http_client`] so
//! connections are pooled and every call carries the configured timeout.

pub mod backend;
pub mod gemini;

use std::time::Duration;

use serde_json::Value;

use crate::error::AppError;

/// Build the shared outbound HTTP client.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Turn a non-2xx upstream response into [`AppError::Upstream`].
///
/// The message is taken from the body's `error` (string, or object with a
/// `message`) or top-level `message`; `fallback` is used when neither exists.
/// The body itself becomes `details`, as JSON when it parses and as text
/// otherwise.
pub(crate) async fn upstream_failure(
    response: reqwest::Response,
    fallback: &str,
) -> AppError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());

    let details = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| Value::String(text));
    let message = error_message(&details).unwrap_or_else(|| fallback.to_string());

    tracing::warn!(status = status.as_u16(), error = %message, "Upstream returned an error");

    AppError::Upstream {
        status,
        message,
        details,
    }
}

/// Read a JSON body from a successful upstream response.
///
/// An empty body (e.g. `204 No Content`) becomes `{ "success": true }`.
pub(crate) async fn success_body(response: reqwest::Response) -> Result<Value, AppError> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::json!({ "success": true }));
    }
    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Transport(format!("Invalid JSON from upstream: {e}")))
}

fn error_message(body: &Value) -> Option<String> {
    let candidate = match body.get("error") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(Value::Object(obj)) => obj.get("message").and_then(Value::as_str),
        _ => None,
    }
    .or_else(|| body.get("message").and_then(Value::as_str));

    candidate
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
