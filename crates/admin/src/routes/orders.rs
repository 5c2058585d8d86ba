//! Order listing for the back office.

use axum::{Json, extract::State};

use bottega_core::Order;

use crate::error::Result;
use crate::services::content::Stored;
use crate::state::AppState;

/// List all persisted orders, newest first.
///
/// GET /api/orders
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Stored<Order>>>> {
    let orders = state.content().list_orders().await?;
    Ok(Json(orders))
}
