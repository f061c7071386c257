//! Handlers for saving and managing items.
//!
//! Every endpoint requires an `Authorization` header ([`BearerToken`]) and
//! forwards exactly one call to the backend.

use axum::extract::{Path, RawQuery, State};
use saveit_core::classify::{classify, derive_title};
use saveit_core::error::CoreError;
use saveit_core::item::{ItemType, NewItem};
use saveit_core::validation::{
    optional_string, require_item_id, require_min_length, require_string, MIN_CONTENT_LENGTH,
};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::BearerToken;
use crate::response::Passthrough;
use crate::state::AppState;
use crate::upstream::backend::BackendCall;

/// POST /api/save
///
/// Save new content. `type` falls back to the classifier and `title` to the
/// content's first line when the caller leaves them out.
pub async fn save_item(
    auth: BearerToken,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Passthrough> {
    let new_item = normalize_new_item(&body)?;
    let item_type = new_item.item_type;

    let payload = serde_json::to_value(&new_item)
        .map_err(|e| AppError::InternalError(format!("Failed to encode item: {e}")))?;

    let response = state
        .backend
        .forward(
            BackendCall::post("/api/save", &auth)
                .json(payload)
                .fallback_error("Failed to save item"),
        )
        .await?;

    tracing::info!(item_type = %item_type, "Item saved");

    Ok(response)
}

/// GET /api/items
///
/// List items. The query string is forwarded verbatim, so filtering and
/// pagination are whatever the backend supports.
pub async fn list_items(
    auth: BearerToken,
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Passthrough> {
    state
        .backend
        .forward(
            BackendCall::get("/api/items", &auth)
                .query(query.as_deref())
                .fallback_error("Failed to fetch items"),
        )
        .await
}

/// GET /api/item/{id}
pub async fn get_item(
    auth: BearerToken,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> AppResult<Passthrough> {
    require_item_id(&item_id)?;

    state
        .backend
        .forward(
            BackendCall::get(format!("/api/item/{item_id}"), &auth)
                .fallback_error("Failed to fetch item"),
        )
        .await
}

/// PUT /api/item/{id}
///
/// Apply a patch object. The patch is opaque to the proxy; the backend
/// decides which fields are writable.
pub async fn update_item(
    auth: BearerToken,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    JsonBody(patch): JsonBody<Value>,
) -> AppResult<Passthrough> {
    require_item_id(&item_id)?;
    if !patch.is_object() {
        return Err(AppError::BadRequest(
            "Request body must be a JSON object".into(),
        ));
    }

    let response = state
        .backend
        .forward(
            BackendCall::put(format!("/api/item/{item_id}"), &auth)
                .json(patch)
                .fallback_error("Failed to update item"),
        )
        .await?;

    tracing::info!(%item_id, "Item updated");

    Ok(response)
}

/// DELETE /api/item/{id}
pub async fn delete_item(
    auth: BearerToken,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> AppResult<Passthrough> {
    require_item_id(&item_id)?;

    let response = state
        .backend
        .forward(
            BackendCall::delete(format!("/api/item/{item_id}"), &auth)
                .fallback_error("Failed to delete item"),
        )
        .await?;

    tracing::info!(%item_id, "Item deleted");

    Ok(response)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate a save body and fill in `type` and `title` when absent.
fn normalize_new_item(body: &Value) -> Result<NewItem, CoreError> {
    let content = require_string(body, "content")?;
    require_min_length(content, "content", MIN_CONTENT_LENGTH)?;

    let item_type = match optional_string(body, "type")? {
        Some(t) => t.parse::<ItemType>()?,
        None => classify(content),
    };

    let title = match optional_string(body, "title")? {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => derive_title(content, item_type),
    };

    Ok(NewItem {
        item_type,
        content: content.to_string(),
        title,
    })
}
