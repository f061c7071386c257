//! Handler for server-keyed summary generation.
//!
//! Unlike the proxy routes this endpoint is unauthenticated: it spends the
//! server's own `GEMINI_API_KEY` rather than a user's backend session.

use axum::extract::State;
use axum::Json;
use saveit_core::validation::{require_non_blank, require_string};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub text: String,
}

/// POST /api/generate-summary
pub async fn generate_summary(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<SummaryResponse>> {
    let content = require_string(&body, "content")?;
    require_non_blank(content, "content")?;

    let gemini = state
        .gemini
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("Summary service is not configured".into()))?;

    let text = gemini.summarize(content).await?;

    tracing::info!(
        content_len = content.len(),
        summary_len = text.len(),
        "Summary generated"
    );

    Ok(Json(SummaryResponse { text }))
}
