//! Checkout submission boundary.
//!
//! Everything the browser already checked is checked again here: shop
//! status, field validation, destination eligibility, and the totals. The
//! client never gets to pick what it pays or where it ships.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use bottega_core::rules::{GeographyPolicy, compose_totals};
use bottega_core::validation::{AddressInput, CheckoutInput, validate_checkout};
use bottega_core::{Address, Email, Order, OrderStatus};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response for a persisted order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmitted {
    pub success: bool,
    pub order_id: String,
}

/// Submit a paid order.
///
/// POST /api/orders
///
/// The payment has already been captured by the provider when this is
/// called; the transaction id in the payload is the receipt. Persistence
/// failure is fatal, email failure is not.
#[instrument(skip(state, input), fields(transaction_id = %input.transaction_id))]
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<CheckoutInput>,
) -> Result<(StatusCode, Json<OrderSubmitted>)> {
    // Shop gate first: reads fail open, a stored closed flag wins
    let status = state.content().fetch_shop_status().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Shop status read failed, assuming open");
        bottega_core::ShopStatus::default()
    });
    if !status.is_open {
        let reason = if status.closing_reason.is_empty() {
            "Il negozio \u{e8} momentaneamente chiuso.".to_string()
        } else {
            status.closing_reason
        };
        return Err(AppError::ShopClosed(reason));
    }

    let errors = validate_checkout(&input, &GeographyPolicy::default());
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // Validation already accepted the email; parse failure here is a bug
    let customer_email = Email::parse(&input.customer.email)
        .map_err(|e| AppError::Internal(format!("validated email failed to parse: {e}")))?;
    let shipping = to_address(&input.customer, customer_email.clone());

    // Totals are recomputed from the line items; client amounts are ignored
    let totals = compose_totals(&input.line_items);

    let order = Order {
        order_id: Order::id_from_transaction(&input.transaction_id),
        customer_name: shipping.name.clone(),
        customer_email,
        total: totals.total,
        status: OrderStatus::Pending,
        tracking_code: None,
        courier: None,
        courier_link: None,
        created_at: Utc::now(),
    };

    state.content().create_order(&order).await?;
    tracing::info!(order_id = %order.order_id, total = %order.total, "Order persisted");

    // Email is best-effort: the order is already paid and stored
    if let Err(e) = state
        .email()
        .send_order_confirmation(
            shipping.email.as_str(),
            &order.order_id,
            &shipping.name,
            &input.line_items,
            &totals,
        )
        .await
    {
        tracing::error!(order_id = %order.order_id, error = %e, "Order confirmation email failed");
    }
    if let Err(e) = state
        .email()
        .send_order_notification(&order.order_id, &shipping, &input.line_items, &totals)
        .await
    {
        tracing::error!(order_id = %order.order_id, error = %e, "Order notification email failed");
    }

    Ok((
        StatusCode::CREATED,
        Json(OrderSubmitted {
            success: true,
            order_id: order.order_id,
        }),
    ))
}

/// Build the canonical shipping address from the validated raw input.
fn to_address(input: &AddressInput, email: Email) -> Address {
    Address {
        name: input.name.trim().to_owned(),
        address_line: input.address_line.trim().to_owned(),
        city: input.city.trim().to_owned(),
        province: input.province.trim().to_uppercase(),
        zip: input.zip.trim().to_owned(),
        email,
        phone: input.phone.trim().to_owned(),
        notes: input
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_owned),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_shape() {
        let response = OrderSubmitted {
            success: true,
            order_id: "5TY05013".to_owned(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json.get("success").unwrap(), true);
        assert_eq!(json.get("orderId").unwrap(), "5TY05013");
    }

    #[test]
    fn test_to_address_normalizes_fields() {
        let input = AddressInput {
            name: " Anna Russo ".to_owned(),
            address_line: "Via Roma 1".to_owned(),
            city: "Lecce".to_owned(),
            province: "le".to_owned(),
            zip: "73100".to_owned(),
            email: "anna@esempio.it".to_owned(),
            phone: "329 1234567".to_owned(),
            notes: Some("   ".to_owned()),
        };
        let email = Email::parse("anna@esempio.it").unwrap();
        let address = to_address(&input, email);
        assert_eq!(address.name, "Anna Russo");
        assert_eq!(address.province, "LE");
        assert!(address.notes.is_none());
    }
}
