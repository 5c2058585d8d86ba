//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (content platform reachable)
//!
//! # Catalog
//! GET  /api/products           - Full product catalog
//! GET  /api/products/{id}      - One product
//!
//! # Shop status
//! GET  /api/shop-status        - Open/closed switch (fails open)
//!
//! # Submissions
//! POST /api/orders             - Checkout submission (validated server-side)
//! POST /api/reservations       - Pickup booking submission
//! ```

pub mod catalog;
pub mod orders;
pub mod reservations;
pub mod shop_status;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{read_rate_limiter, submission_rate_limiter};
use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list))
        .route("/{id}", get(catalog::show))
}

/// Create the shop-status routes router.
pub fn shop_status_routes() -> Router<AppState> {
    Router::new().route("/", get(shop_status::show))
}

/// Create the submission routes router.
///
/// Checkout and booking share the strict rate limiter; both re-validate
/// every field server-side because client-side checks are bypassable.
pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(orders::submit))
        .route("/reservations", post(reservations::submit))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/api/products",
            catalog_routes().layer(read_rate_limiter()),
        )
        .nest(
            "/api/shop-status",
            shop_status_routes().layer(read_rate_limiter()),
        )
        .nest("/api", submission_routes().layer(submission_rate_limiter()))
}
