pub mod code;
pub mod courses;
pub mod health;
pub mod items;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /save                                  save item (auth)
/// /items                                 list items, query passthrough (auth)
/// /item/{id}                             get, update, delete (auth)
///
/// /code/analyze                          analyze snippet (auth)
/// /code/optimize                         optimize snippet (auth)
///
/// /courses/analyze-url                   analyze course source URL (auth)
/// /courses/create-from-structure         create course from outline (auth)
///
/// /generate-summary                      Gemini summary (public, server key)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(items::router())
        .nest("/code", code::router())
        .nest("/courses", courses::router())
        .route("/generate-summary", post(handlers::summary::generate_summary))
}
