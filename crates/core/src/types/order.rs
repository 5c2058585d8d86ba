//! Persisted order records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::email::Email;

/// Fulfillment state of a persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Paid, awaiting shipment.
    #[default]
    Pending,
    /// Handed to the courier; tracking fields are set.
    Shipped,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Shipped => write!(f, "shipped"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "shipped" => Ok(Self::Shipped),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// An order as stored on the content platform.
///
/// `total` is recomputed server-side from the submitted line items before the
/// record is written; the value sent by the client is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Short identifier shown to the customer.
    pub order_id: String,
    pub customer_name: String,
    pub customer_email: Email,
    /// Grand total in EUR, shipping included.
    pub total: Decimal,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Length of the customer-facing order identifier.
    pub const ID_LENGTH: usize = 8;

    /// Derive the customer-facing order id from a payment transaction id.
    ///
    /// Takes the first [`Self::ID_LENGTH`] characters; the transaction id is
    /// unique in the payment provider's namespace, so the prefix is unique
    /// enough at this shop's volume.
    #[must_use]
    pub fn id_from_transaction(transaction_id: &str) -> String {
        transaction_id.chars().take(Self::ID_LENGTH).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_transaction_truncates() {
        assert_eq!(Order::id_from_transaction("5TY05013RG002845M"), "5TY05013");
    }

    #[test]
    fn test_id_from_transaction_short_input() {
        assert_eq!(Order::id_from_transaction("ABC"), "ABC");
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [OrderStatus::Pending, OrderStatus::Shipped] {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
    }
}
