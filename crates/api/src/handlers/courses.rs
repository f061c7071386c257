//! Handlers for course generation from external material.

use axum::extract::State;
use saveit_core::error::CoreError;
use saveit_core::validation::{
    ensure_scheme, optional_string, require_non_blank, require_string, DEFAULT_USER_ROLE,
};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::BearerToken;
use crate::response::Passthrough;
use crate::state::AppState;
use crate::upstream::backend::BackendCall;

/// POST /api/courses/analyze-url
///
/// The URL is given an `https://` scheme when it has none and must then
/// parse as an absolute URL. `userRole` defaults to [`DEFAULT_USER_ROLE`].
pub async fn analyze_url(
    auth: BearerToken,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Passthrough> {
    let payload = normalize_analyze_url(&body)?;

    tracing::info!(url = %payload["url"], "Analyzing course URL");

    state
        .backend
        .forward(
            BackendCall::post("/api/courses/analyze-url", &auth)
                .json(payload)
                .fallback_error("Failed to analyze URL"),
        )
        .await
}

/// POST /api/courses/create-from-structure
///
/// Requires `courseData.courseTitle`; the rest of `courseData` is forwarded
/// as-is.
pub async fn create_from_structure(
    auth: BearerToken,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Passthrough> {
    let course_data = body
        .get("courseData")
        .filter(|v| v.is_object())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "courseData must be an object".into(),
            ))
        })?;
    let title = require_string(course_data, "courseTitle")?;
    require_non_blank(title, "courseTitle")?;

    tracing::info!(course_title = title, "Creating course from structure");

    state
        .backend
        .forward(
            BackendCall::post("/api/courses/create-from-structure", &auth)
                .json(json!({ "courseData": course_data }))
                .fallback_error("Failed to create course"),
        )
        .await
}

/// Validate an analyze-url body and build the forwarded payload.
fn normalize_analyze_url(body: &Value) -> Result<Value, AppError> {
    let raw = require_string(body, "url")?;
    require_non_blank(raw, "url")?;

    let url = ensure_scheme(raw);
    let parsed = reqwest::Url::parse(&url)
        .map_err(|e| AppError::BadRequest(format!("Invalid URL format: {e}")))?;
    if parsed.host_str().is_none() {
        return Err(AppError::BadRequest("Invalid URL format: missing host".into()));
    }

    let user_role = optional_string(body, "userRole")?
        .filter(|r| !r.trim().is_empty())
        .unwrap_or(DEFAULT_USER_ROLE);

    let mut payload = json!({ "url": url, "userRole": user_role });
    if let Some(level) = optional_string(body, "targetSkillLevel")? {
        payload["targetSkillLevel"] = Value::String(level.to_string());
    }

    Ok(payload)
}
