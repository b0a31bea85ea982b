//! Middleware module
//!
//! Request-scoped concerns: authentication and role checks.

pub mod auth;

pub use auth::{require_role, Claims, CurrentUser};
