//! Domain types and pure logic for the SaveIt ingest pipeline.
//!
//! Nothing in this crate performs I/O: the classifier, title derivation,
//! wire/view model conversion and input validation are all plain functions
//! shared by the proxy service and the client layer.

pub mod classify;
pub mod error;
pub mod item;
pub mod types;
pub mod validation;
