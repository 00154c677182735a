//! Employee management core module.
//!
//! Server-rendered CRUD over `Employee` records:
//! - `form`: binding and validation of the six submitted fields.
//! - `handlers`: one function per page, returning a `HandlerResponse`.
//! - `views`: HTML rendering.

pub mod form;
pub mod handlers;
pub mod views;

mod tests;
