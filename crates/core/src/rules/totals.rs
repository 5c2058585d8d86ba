//! Order totals.

use rust_decimal::Decimal;

use crate::rules::shipping::shipping_cost;
use crate::types::line_item::{LineItem, OrderTotals};

/// Compose subtotal, shipping and grand total for a set of line items.
///
/// This is the single place totals are computed: the storefront display, the
/// payment capture amount, the persisted order record and the confirmation
/// emails all call this function. An empty set composes to all zeros.
#[must_use]
pub fn compose_totals(line_items: &[LineItem]) -> OrderTotals {
    let subtotal: Decimal = line_items.iter().map(LineItem::line_total).sum();
    let shipping = shipping_cost(total_weight(line_items));
    OrderTotals {
        subtotal,
        shipping_cost: shipping,
        total: subtotal + shipping,
    }
}

/// Total order weight in kilograms.
#[must_use]
pub fn total_weight(line_items: &[LineItem]) -> Decimal {
    line_items.iter().map(LineItem::line_weight).sum()
}
