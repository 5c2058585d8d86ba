//! Pickup reservations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A requested in-store pickup slot, as submitted by the booking form.
///
/// Both fields are kept as raw strings (`YYYY-MM-DD` and `HH:MM`);
/// [`crate::rules::hours::WeeklySchedule::is_valid_pickup_time`] decides
/// whether the slot falls within opening hours, treating unparseable input
/// as invalid rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupRequest {
    /// ISO calendar date.
    pub date: String,
    /// Zero-padded time of day.
    pub time: String,
}

/// Handling state of a persisted reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Awaiting preparation at the counter.
    #[default]
    Pending,
    /// Picked up by the customer.
    Completed,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid reservation status: {s}")),
        }
    }
}

/// A reservation as stored on the content platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub customer_name: String,
    pub customer_phone: String,
    /// Free-text list of the requested products.
    pub product_list: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [ReservationStatus::Pending, ReservationStatus::Completed] {
            let parsed: ReservationStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("done".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_wire_shape() {
        let reservation = Reservation {
            customer_name: "Lucia Greco".to_owned(),
            customer_phone: "3287654321".to_owned(),
            product_list: "2 kg pezzetti di cavallo".to_owned(),
            pickup_date: "2025-03-07".to_owned(),
            pickup_time: "09:30".to_owned(),
            status: ReservationStatus::Pending,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&reservation).unwrap();
        assert!(json.get("customerName").is_some());
        assert!(json.get("pickupTime").is_some());
        assert_eq!(json.get("status").unwrap(), "pending");
    }
}
