use axum::routing::post;
use axum::Router;

use crate::handlers::code;
use crate::state::AppState;

/// Code assistant routes mounted at `/api/code`.
///
/// ```text
/// POST /analyze             -> analyze_code
/// POST /optimize            -> optimize_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(code::analyze_code))
        .route("/optimize", post(code::optimize_code))
}
