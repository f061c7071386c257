//! Request extractors applied ahead of the proxy handlers.
//!
//! - [`auth::BearerToken`] -- Requires an `Authorization` header and carries it
//!   through to the backend call.

pub mod auth;
