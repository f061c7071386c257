use axum::routing::post;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Course routes mounted at `/api/courses`.
///
/// ```text
/// POST /analyze-url                 -> analyze_url
/// POST /create-from-structure       -> create_from_structure
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze-url", post(courses::analyze_url))
        .route(
            "/create-from-structure",
            post(courses::create_from_structure),
        )
}
