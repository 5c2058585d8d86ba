//! Integration tests for Bottega del Macellaio.
//!
//! # Running Tests
//!
//! The tests in `tests/` exercise the running binaries over HTTP and are
//! all `#[ignore]`d by default. To run them:
//!
//! ```bash
//! # Start both servers against a test dataset
//! cargo run -p bottega-storefront &
//! cargo run -p bottega-admin &
//!
//! cargo test -p bottega-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `STOREFRONT_BASE_URL` - storefront base URL (default: `http://localhost:3000`)
//! - `ADMIN_BASE_URL` - admin base URL (default: `http://localhost:3001`)
//! - `ADMIN_API_TOKEN` - bearer token the admin server was started with

/// Base URL for the storefront API.
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin API.
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// The bearer token configured on the admin server under test.
///
/// # Panics
///
/// Panics when `ADMIN_API_TOKEN` is unset; the admin tests cannot run
/// without it.
#[must_use]
pub fn admin_api_token() -> String {
    std::env::var("ADMIN_API_TOKEN").expect("ADMIN_API_TOKEN must be set for admin tests")
}
