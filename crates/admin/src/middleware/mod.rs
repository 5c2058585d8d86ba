//! Middleware for the admin API.
//!
//! - `auth`: bearer-token gate for every `/api` route
//! - `request_id`: request correlation IDs for tracing and Sentry

pub mod auth;
pub mod request_id;

pub use auth::require_api_token;
pub use request_id::request_id_middleware;
