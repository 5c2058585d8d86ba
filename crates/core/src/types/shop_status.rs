//! Shop open/closed status.

use serde::{Deserialize, Serialize};

/// Singleton open/closed switch persisted on the content platform.
///
/// The storefront consults this before accepting an order; the admin API is
/// the only writer. When the document is missing or the read fails, callers
/// fall back to [`ShopStatus::default`], which is open with no closing
/// reason. Failing open is deliberate: the alternative turns every
/// content-platform hiccup into a closed shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopStatus {
    #[serde(rename = "isShopOpen")]
    pub is_open: bool,
    /// Customer-facing message shown while the shop is closed.
    #[serde(default)]
    pub closing_reason: String,
}

impl Default for ShopStatus {
    fn default() -> Self {
        Self {
            is_open: true,
            closing_reason: String::new(),
        }
    }
}
