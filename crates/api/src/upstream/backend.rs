//! Forwarding client for the item backend.
//!
//! Each proxy route builds one [`BackendCall`] and hands it to
//! [`BackendClient::forward`]: exactly one outbound request per inbound
//! request, no retries.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::auth::BearerToken;
use crate::response::Passthrough;
use crate::upstream::{success_body, upstream_failure};

/// HTTP client bound to the backend base URL.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

/// A single request to forward to the backend.
#[derive(Debug)]
pub struct BackendCall<'a> {
    method: Method,
    path: String,
    authorization: &'a HeaderValue,
    query: Option<&'a str>,
    body: Option<Value>,
    fallback_error: &'static str,
}

impl<'a> BackendCall<'a> {
    pub fn new(method: Method, path: impl Into<String>, auth: &'a BearerToken) -> Self {
        Self {
            method,
            path: path.into(),
            authorization: auth.header_value(),
            query: None,
            body: None,
            fallback_error: "Backend request failed",
        }
    }

    pub fn get(path: impl Into<String>, auth: &'a BearerToken) -> Self {
        Self::new(Method::GET, path, auth)
    }

    pub fn post(path: impl Into<String>, auth: &'a BearerToken) -> Self {
        Self::new(Method::POST, path, auth)
    }

    pub fn put(path: impl Into<String>, auth: &'a BearerToken) -> Self {
        Self::new(Method::PUT, path, auth)
    }

    pub fn delete(path: impl Into<String>, auth: &'a BearerToken) -> Self {
        Self::new(Method::DELETE, path, auth)
    }

    /// Raw query string appended verbatim (without the leading `?`).
    pub fn query(mut self, query: Option<&'a str>) -> Self {
        self.query = query.filter(|q| !q.is_empty());
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Message used when the backend's error body names none.
    pub fn fallback_error(mut self, message: &'static str) -> Self {
        self.fallback_error = message;
        self
    }
}

impl BackendClient {
    /// Create a client for the backend at `base_url` (no trailing slash).
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for a call.
    pub fn url_for(&self, call: &BackendCall<'_>) -> String {
        match call.query {
            Some(q) => format!("{}{}?{}", self.base_url, call.path, q),
            None => format!("{}{}", self.base_url, call.path),
        }
    }

    /// Send the call and relay the outcome.
    ///
    /// 2xx answers come back as a [`Passthrough`] of the backend's JSON.
    /// Non-2xx answers become `AppError::Upstream` with the backend status;
    /// connection, timeout and parse failures become `AppError::Transport`.
    pub async fn forward(&self, call: BackendCall<'_>) -> AppResult<Passthrough> {
        let url = self.url_for(&call);
        tracing::debug!(method = %call.method, %url, "Forwarding to backend");

        let mut request = self
            .client
            .request(call.method.clone(), &url)
            .header(AUTHORIZATION, call.authorization.clone())
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(upstream_failure(response, call.fallback_error).await);
        }

        let body = success_body(response).await?;
        Ok(Passthrough { status, body })
    }
}
