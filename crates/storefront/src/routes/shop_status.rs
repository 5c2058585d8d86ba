//! Shop open/closed status route handler.

use axum::{Json, extract::State};

use bottega_core::ShopStatus;

use crate::state::AppState;

/// Read the shop-status singleton.
///
/// GET /api/shop-status
///
/// A content-platform failure degrades to the open default rather than an
/// error response: an outage must never block the storefront UI, and the
/// checkout boundary applies the same fail-open rule independently.
pub async fn show(State(state): State<AppState>) -> Json<ShopStatus> {
    let status = state.content().fetch_shop_status().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Shop status read failed, falling back to open");
        ShopStatus::default()
    });
    Json(status)
}
