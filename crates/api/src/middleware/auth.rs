//! `Authorization` header extractor for protected proxy routes.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use saveit_core::error::CoreError;

use crate::error::AppError;

/// The caller's `Authorization` header, forwarded to the backend unchanged.
///
/// The proxy does not inspect the token; the backend owns verification. The
/// only check here is presence, so unauthenticated requests are answered with
/// 401 before any outbound call is made.
///
/// ```ignore
/// async fn my_handler(auth: BearerToken) -> AppResult<Passthrough> {
///     state.backend.forward(BackendCall::get("/api/items", &auth)).await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BearerToken(pub HeaderValue);

impl BearerToken {
    pub fn header_value(&self) -> &HeaderValue {
        &self.0
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .filter(|v| !v.as_bytes().iter().all(u8::is_ascii_whitespace))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        Ok(BearerToken(header.clone()))
    }
}
