//! Typed client for the SaveIt API proxy.
//!
//! [`ApiClient`] wraps each proxy route, attaches the bearer token from an
//! injected [`TokenStore`] on every call, unwraps the `{ success, data }`
//! envelope and converts backend items into [`SavedItem`]s.
//!
//! [`SavedItem`]: saveit_core::item::SavedItem

pub mod api;
pub mod error;
pub mod token;

pub use api::{ApiClient, ItemFilter};
pub use error::ClientError;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
