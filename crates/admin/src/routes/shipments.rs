//! Shipment action: record tracking data and notify the customer.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Shipment request payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentInput {
    pub email: String,
    pub name: String,
    pub order_id: String,
    pub tracking_code: String,
    pub courier: String,
    #[serde(default)]
    pub courier_link: Option<String>,
}

/// Response for a recorded shipment.
#[derive(Debug, Serialize)]
pub struct ShipmentRecorded {
    pub success: bool,
}

/// Record a shipment for an order.
///
/// POST /api/shipments
///
/// The tracking email is the point of the operation, so a delivery failure
/// is fatal here, unlike the best-effort notifications at checkout. The
/// order moves to shipped only after the email has gone out.
#[instrument(skip(state, input), fields(order_id = %input.order_id))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ShipmentInput>,
) -> Result<(StatusCode, Json<ShipmentRecorded>)> {
    let tracking_code = input.tracking_code.trim();
    let courier = input.courier.trim();
    if tracking_code.is_empty() || courier.is_empty() {
        return Err(AppError::BadRequest(
            "trackingCode and courier are required".to_string(),
        ));
    }

    let stored = state
        .content()
        .find_order(&input.order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(input.order_id.clone()))?;

    state
        .email()
        .send_shipment_notification(
            input.email.trim(),
            input.name.trim(),
            &input.order_id,
            tracking_code,
            courier,
            input.courier_link.as_deref().map(str::trim),
        )
        .await?;

    state
        .content()
        .mark_order_shipped(
            &stored.id,
            tracking_code,
            courier,
            input.courier_link.as_deref().map(str::trim),
        )
        .await?;

    tracing::info!(
        order_id = %input.order_id,
        courier = %courier,
        "Shipment recorded and customer notified"
    );

    Ok((StatusCode::OK, Json(ShipmentRecorded { success: true })))
}
