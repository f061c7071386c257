//! Handlers for AI code analysis and optimization.

use axum::extract::State;
use saveit_core::validation::{
    optional_string, require_min_length, require_string, DEFAULT_OPTIMIZE_LANGUAGE,
    MIN_CODE_LENGTH,
};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::auth::BearerToken;
use crate::response::Passthrough;
use crate::state::AppState;
use crate::upstream::backend::BackendCall;

/// POST /api/code/analyze
pub async fn analyze_code(
    auth: BearerToken,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Passthrough> {
    let code = require_string(&body, "code")?;
    require_min_length(code, "code", MIN_CODE_LENGTH)?;

    tracing::debug!(code_len = code.len(), "Analyzing code");

    state
        .backend
        .forward(
            BackendCall::post("/api/code/analyze", &auth)
                .json(json!({ "code": code }))
                .fallback_error("Failed to analyze code"),
        )
        .await
}

/// POST /api/code/optimize
///
/// `language` defaults to [`DEFAULT_OPTIMIZE_LANGUAGE`].
pub async fn optimize_code(
    auth: BearerToken,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Passthrough> {
    let code = require_string(&body, "code")?;
    require_min_length(code, "code", MIN_CODE_LENGTH)?;
    let language = optional_string(&body, "language")?
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(DEFAULT_OPTIMIZE_LANGUAGE);

    tracing::debug!(code_len = code.len(), language, "Optimizing code");

    state
        .backend
        .forward(
            BackendCall::post("/api/code/optimize", &auth)
                .json(json!({ "code": code, "language": language }))
                .fallback_error("Failed to optimize code"),
        )
        .await
}
