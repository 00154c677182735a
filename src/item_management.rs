//! JSON item API.
//!
//! Items live in an injected `ItemStore` and are addressed by position.
pub mod handlers;
