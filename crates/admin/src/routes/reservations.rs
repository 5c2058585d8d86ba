//! Pickup reservation management.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bottega_core::{Reservation, ReservationStatus};

use crate::error::{AppError, Result};
use crate::services::content::Stored;
use crate::state::AppState;

/// Query parameters for the reservation listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub status: Option<ReservationStatus>,
}

/// Response for a completed reservation.
#[derive(Debug, Serialize)]
pub struct ReservationCompleted {
    pub success: bool,
}

/// List reservations, optionally filtered by status.
///
/// GET /api/reservations?status=pending
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Stored<Reservation>>>> {
    let reservations = state.content().list_reservations(params.status).await?;
    Ok(Json(reservations))
}

/// Mark a reservation as picked up.
///
/// POST /api/reservations/{id}/complete
#[instrument(skip(state))]
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReservationCompleted>> {
    state
        .content()
        .find_reservation(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.clone()))?;

    state.content().complete_reservation(&id).await?;
    tracing::info!(reservation_id = %id, "Reservation completed");

    Ok(Json(ReservationCompleted { success: true }))
}
