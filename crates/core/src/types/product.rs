//! Catalog products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog section a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Donkey,
    Mule,
    Horse,
    SucklingPig,
    Specialties,
}

impl ProductCategory {
    /// Customer-facing section label, in Italian.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Donkey => "Carne di asino",
            Self::Mule => "Carne di mulo",
            Self::Horse => "Carne di cavallo",
            Self::SucklingPig => "Carne di lattone",
            Self::Specialties => "Esclusive",
        }
    }
}

/// A product offered in the catalog.
///
/// Prices are per unit in EUR; `offer_price` is what the customer pays and is
/// at most `list_price`. `weight_kg` is the weight of one unit and feeds the
/// shipping tier calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub list_price: Decimal,
    pub offer_price: Decimal,
    pub weight_kg: Decimal,
    pub category: ProductCategory,
    /// Identifier of the product photo on the media CDN.
    pub image_id: String,
    pub description: String,
}

impl Product {
    /// Whether the product is currently discounted.
    #[must_use]
    pub fn is_on_offer(&self) -> bool {
        self.offer_price < self.list_price
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(ProductCategory::Donkey.label(), "Carne di asino");
        assert_eq!(ProductCategory::Specialties.label(), "Esclusive");
    }

    #[test]
    fn test_category_wire_names_are_kebab_case() {
        let json = serde_json::to_string(&ProductCategory::SucklingPig).unwrap();
        assert_eq!(json, "\"suckling-pig\"");
    }
}
