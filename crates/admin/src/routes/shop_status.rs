//! Shop open/closed switch management.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use bottega_core::ShopStatus;

use crate::error::Result;
use crate::state::AppState;

/// Shop-status update payload.
///
/// `isShopOpen` is required and must be a boolean; a missing or mistyped
/// field is rejected at deserialization time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopStatusUpdate {
    pub is_shop_open: bool,
    #[serde(default)]
    pub closing_reason: Option<String>,
}

/// Read the current stored shop status.
///
/// GET /api/shop-status
///
/// Falls back to the open default when the singleton is missing; transport
/// failures surface as 502 since the admin needs to know the stored truth.
pub async fn show(State(state): State<AppState>) -> Result<Json<ShopStatus>> {
    let status = state.content().fetch_shop_status().await?;
    Ok(Json(status))
}

/// Upsert the shop status singleton.
///
/// PATCH /api/shop-status
///
/// Creates the document if it does not exist yet, then applies the patch.
/// Returns the stored status as now persisted.
#[instrument(skip(state), fields(is_shop_open = input.is_shop_open))]
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<ShopStatusUpdate>,
) -> Result<Json<ShopStatus>> {
    let status = ShopStatus {
        is_open: input.is_shop_open,
        closing_reason: input
            .closing_reason
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    };

    state.content().upsert_shop_status(&status).await?;
    tracing::info!(is_shop_open = status.is_open, "Shop status updated");

    Ok(Json(status))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_update_requires_boolean_flag() {
        let result: std::result::Result<ShopStatusUpdate, _> =
            serde_json::from_str(r#"{"isShopOpen": "no"}"#);
        assert!(result.is_err());

        let result: std::result::Result<ShopStatusUpdate, _> = serde_json::from_str(r"{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_update_parses_with_reason() {
        let update: ShopStatusUpdate =
            serde_json::from_str(r#"{"isShopOpen": false, "closingReason": "Ferie estive"}"#)
                .unwrap();
        assert!(!update.is_shop_open);
        assert_eq!(update.closing_reason.as_deref(), Some("Ferie estive"));
    }
}
