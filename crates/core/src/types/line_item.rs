//! Order line items and derived totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry in a cart or order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    /// Unit price in EUR.
    pub unit_price: Decimal,
    /// Weight of a single unit in kilograms.
    pub weight_per_unit: Decimal,
    /// Number of units ordered. Valid orders have quantity >= 1.
    pub quantity: u32,
}

impl LineItem {
    /// Price contribution of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Weight contribution of this line in kilograms.
    #[must_use]
    pub fn line_weight(&self) -> Decimal {
        self.weight_per_unit * Decimal::from(self.quantity)
    }
}

/// Totals derived from a set of line items.
///
/// Always produced by [`crate::rules::totals::compose_totals`] and never
/// stored independently of its inputs. `total` equals
/// `subtotal + shipping_cost` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
}
