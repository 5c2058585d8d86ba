//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Liveness check
//! GET  /health/ready                   - Readiness check (content platform reachable)
//!
//! # Orders (bearer token required)
//! GET  /api/orders                     - All orders, newest first
//! POST /api/shipments                  - Record tracking data, email the customer
//!
//! # Shop status (bearer token required)
//! GET  /api/shop-status                - Current stored status
//! PATCH /api/shop-status               - Upsert the open/closed switch
//!
//! # Reservations (bearer token required)
//! GET  /api/reservations?status=...    - List reservations
//! POST /api/reservations/{id}/complete - Mark picked up
//! ```

pub mod orders;
pub mod reservations;
pub mod shipments;
pub mod shop_status;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::require_api_token;
use crate::state::AppState;

/// Create the token-gated API router.
///
/// Every route in here sits behind the bearer-token middleware; nothing in
/// the admin API is reachable anonymously besides the health probes.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::list))
        .route("/shipments", post(shipments::create))
        .route(
            "/shop-status",
            get(shop_status::show).patch(shop_status::update),
        )
        .route("/reservations", get(reservations::list))
        .route("/reservations/{id}/complete", post(reservations::complete))
        .layer(axum::middleware::from_fn_with_state(
            state,
            require_api_token,
        ))
}

/// Create all routes for the admin API.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new().nest("/api", api_routes(state))
}
