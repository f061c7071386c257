//! Async wrappers over the proxy routes.

use std::sync::Arc;

use reqwest::Method;
use saveit_core::item::{BackendItem, ItemType, NewItem, SavedItem};
use saveit_core::validation::require_item_id;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ClientError;
use crate::token::TokenStore;

/// Filters forwarded as the `/api/items` query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// `{ success, data, error }` as returned by the proxy.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryBody {
    text: String,
}

/// Client for one SaveIt proxy deployment.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// * `base_url` - Proxy origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, tokens)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            tokens,
        }
    }

    // ---- items ----

    /// Save new content and return it as the backend stored it.
    pub async fn save_item(&self, item: &NewItem) -> Result<SavedItem, ClientError> {
        let request = self.request(Method::POST, "/api/save").json(item);
        let saved: BackendItem = self.send_envelope(request).await?;
        Ok(saved.into())
    }

    /// List items, degrading to an empty list on any failure.
    ///
    /// The failure is logged, not returned; use [`Self::try_fetch_items`] when
    /// the caller needs to tell "no items" from "could not load".
    pub async fn fetch_items(&self, filter: &ItemFilter) -> Vec<SavedItem> {
        match self.try_fetch_items(filter).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch items, showing empty list");
                Vec::new()
            }
        }
    }

    /// List items, surfacing failures.
    pub async fn try_fetch_items(&self, filter: &ItemFilter) -> Result<Vec<SavedItem>, ClientError> {
        let request = self.request(Method::GET, "/api/items").query(filter);
        let items: Vec<BackendItem> = self.send_envelope(request).await?;
        Ok(items.into_iter().map(SavedItem::from).collect())
    }

    pub async fn fetch_item(&self, id: &str) -> Result<SavedItem, ClientError> {
        require_item_id(id)?;
        let request = self.request(Method::GET, &format!("/api/item/{id}"));
        let item: BackendItem = self.send_envelope(request).await?;
        Ok(item.into())
    }

    /// Apply a partial update; `patch` must be a JSON object.
    pub async fn update_item(&self, id: &str, patch: &Value) -> Result<SavedItem, ClientError> {
        require_item_id(id)?;
        let request = self
            .request(Method::PUT, &format!("/api/item/{id}"))
            .json(patch);
        let item: BackendItem = self.send_envelope(request).await?;
        Ok(item.into())
    }

    /// Delete an item. Any non-2xx answer is an error.
    ///
    /// Ids that would leave the `/api/item/` segment fail with
    /// [`ClientError::Invalid`] without a request being made.
    pub async fn delete_item(&self, id: &str) -> Result<(), ClientError> {
        require_item_id(id)?;
        let response = self
            .request(Method::DELETE, &format!("/api/item/{id}"))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        tracing::debug!(item_id = id, "Item deleted");
        Ok(())
    }

    // ---- AI helpers ----

    pub async fn analyze_code(&self, code: &str) -> Result<Value, ClientError> {
        let request = self
            .request(Method::POST, "/api/code/analyze")
            .json(&json!({ "code": code }));
        self.send_envelope(request).await
    }

    /// Optimize `code`; the proxy assumes JavaScript when `language` is `None`.
    pub async fn optimize_code(
        &self,
        code: &str,
        language: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut body = json!({ "code": code });
        if let Some(language) = language {
            body["language"] = Value::String(language.to_string());
        }
        let request = self.request(Method::POST, "/api/code/optimize").json(&body);
        self.send_envelope(request).await
    }

    pub async fn analyze_course_url(
        &self,
        url: &str,
        user_role: Option<&str>,
        target_skill_level: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut body = json!({ "url": url });
        if let Some(role) = user_role {
            body["userRole"] = Value::String(role.to_string());
        }
        if let Some(level) = target_skill_level {
            body["targetSkillLevel"] = Value::String(level.to_string());
        }
        let request = self
            .request(Method::POST, "/api/courses/analyze-url")
            .json(&body);
        self.send_envelope(request).await
    }

    /// `course_data` must contain a non-empty `courseTitle`.
    pub async fn create_course_from_structure(
        &self,
        course_data: &Value,
    ) -> Result<Value, ClientError> {
        let request = self
            .request(Method::POST, "/api/courses/create-from-structure")
            .json(&json!({ "courseData": course_data }));
        self.send_envelope(request).await
    }

    pub async fn generate_summary(&self, content: &str) -> Result<String, ClientError> {
        let response = self
            .request(Method::POST, "/api/generate-summary")
            .json(&json!({ "content": content }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body: SummaryBody = response.json().await?;
        Ok(body.text)
    }

    // ---- private helpers ----

    /// Start a request, attaching the current bearer token if there is one.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        match self.tokens.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and unwrap `{ success: true, data }`.
    async fn send_envelope<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        let envelope: Envelope<T> = response.json().await?;
        if !envelope.success {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope
                    .error
                    .unwrap_or_else(|| "Request was not successful".to_string()),
            });
        }

        envelope
            .data
            .ok_or_else(|| ClientError::Envelope("response has no data".to_string()))
    }

    /// Build [`ClientError::Api`] from an error response, preferring the
    /// envelope's `error` string.
    async fn api_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
