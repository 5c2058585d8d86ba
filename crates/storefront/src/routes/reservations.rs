//! Pickup booking boundary.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use bottega_core::rules::WeeklySchedule;
use bottega_core::validation::{BookingInput, validate_booking};
use bottega_core::{Reservation, ReservationStatus};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response for a persisted reservation.
#[derive(Debug, Serialize)]
pub struct ReservationSubmitted {
    pub success: bool,
}

/// Submit a pickup reservation.
///
/// POST /api/reservations
///
/// The requested slot is re-checked against the opening hours here; the
/// form's own check only exists for feedback. Persistence failure is fatal,
/// the shop notification email is not.
#[instrument(skip(state, input), fields(pickup_date = %input.pickup_date, pickup_time = %input.pickup_time))]
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<BookingInput>,
) -> Result<(StatusCode, Json<ReservationSubmitted>)> {
    let errors = validate_booking(&input, &WeeklySchedule::default());
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let reservation = Reservation {
        customer_name: input.customer_name.trim().to_owned(),
        customer_phone: input.customer_phone.trim().to_owned(),
        product_list: input.product_list.trim().to_owned(),
        pickup_date: input.pickup_date.trim().to_owned(),
        pickup_time: input.pickup_time.trim().to_owned(),
        status: ReservationStatus::Pending,
        created_at: Utc::now(),
    };

    state.content().create_reservation(&reservation).await?;
    tracing::info!(
        pickup_date = %reservation.pickup_date,
        pickup_time = %reservation.pickup_time,
        "Reservation persisted"
    );

    if let Err(e) = state.email().send_reservation_notification(&reservation).await {
        tracing::error!(error = %e, "Reservation notification email failed");
    }

    Ok((
        StatusCode::CREATED,
        Json(ReservationSubmitted { success: true }),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_shape() {
        let response = ReservationSubmitted { success: true };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json.get("success").unwrap(), true);
    }
}
