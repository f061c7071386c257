//! Response shapes shared by the proxy routes.
//!
//! Failures always use [`ErrorEnvelope`]. Successful backend answers are not
//! re-shaped: [`Passthrough`] replays the backend's status and JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Standard `{ "success": false, "error": ..., "details": ... }` envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    pub fn new(error: String, details: Option<Value>) -> Self {
        Self {
            success: false,
            error,
            details,
        }
    }
}

/// A successful upstream answer, relayed unchanged.
#[derive(Debug)]
pub struct Passthrough {
    pub status: StatusCode,
    pub body: Value,
}

impl IntoResponse for Passthrough {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
