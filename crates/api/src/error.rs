use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use saveit_core::error::CoreError;
use serde_json::Value;

use crate::response::ErrorEnvelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds proxy-specific variants.
/// Implements [`IntoResponse`] so every failure leaves the service as the
/// `{ success: false, error, details }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `saveit_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream service answered with a non-2xx status.
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        status: StatusCode,
        message: String,
        details: Value,
    },

    /// The upstream call failed before a usable response arrived
    /// (connect, timeout, unreadable or non-JSON body).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The inbound request ran past `REQUEST_TIMEOUT_SECS`.
    #[error("Request timed out")]
    RequestTimeout,

    /// A dependency the route needs is not configured on this server.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },

            // --- Proxy errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Upstream {
                status,
                message,
                details,
            } => (status, message, Some(details)),
            AppError::Transport(cause) => {
                tracing::error!(error = %cause, "Upstream transport failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(Value::String(cause)),
                )
            }
            AppError::RequestTimeout => {
                tracing::warn!("Request timed out");
                (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string(), None)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(error = %msg, "Service unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, msg, None)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        (status, axum::Json(ErrorEnvelope::new(error, details))).into_response()
    }
}
