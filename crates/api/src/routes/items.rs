//! Route definitions for item storage.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes mounted at `/api`.
///
/// ```text
/// POST   /save              -> save_item
/// GET    /items             -> list_items
/// GET    /item/{id}         -> get_item
/// PUT    /item/{id}         -> update_item
/// DELETE /item/{id}         -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(items::save_item))
        .route("/items", get(items::list_items))
        .route(
            "/item/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
