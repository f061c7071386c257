//! Request body extraction with envelope-shaped rejections.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] whose rejection is an [`AppError`],
/// so malformed bodies answer with the same envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
