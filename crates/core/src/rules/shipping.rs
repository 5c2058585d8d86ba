//! Tiered shipping costs by total order weight.

use rust_decimal::Decimal;

/// Upper bound of the small-parcel tier, in kilograms.
const SMALL_PARCEL_MAX_KG: Decimal = Decimal::TEN;

/// Shipping cost in EUR for an order weighing `total_weight_kg`.
///
/// Tiers, boundaries inclusive on the lower tier:
/// - 0 kg: free (an empty order ships nothing)
/// - up to 10 kg: 15 EUR
/// - over 10 up to 20 kg: 13 EUR
/// - over 20 kg: free
///
/// Heavier orders shipping cheaper is the shop's bulk-order incentive, not a
/// bug; the tier table must not be reordered into a monotonic one.
#[must_use]
pub fn shipping_cost(total_weight_kg: Decimal) -> Decimal {
    if total_weight_kg <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if total_weight_kg <= SMALL_PARCEL_MAX_KG {
        return Decimal::from(15);
    }
    if total_weight_kg <= Decimal::from(20) {
        return Decimal::from(13);
    }
    Decimal::ZERO
}
