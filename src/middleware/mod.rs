//! Middleware module
//!
//! Request-level concerns that sit in front of the RPC handlers.

pub mod auth;

pub use auth::AuthUser;
