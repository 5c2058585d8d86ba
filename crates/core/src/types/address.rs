//! Shipping and billing addresses.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;

/// A shipping or billing address collected at checkout.
///
/// Field-level validation (lengths, province format, geography block-lists)
/// happens in [`crate::validation`] before a raw payload is promoted to this
/// type; an `Address` value is assumed well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Full name of the recipient.
    pub name: String,
    /// Street address, including house number.
    pub address_line: String,
    pub city: String,
    /// Two-letter province code, uppercase.
    pub province: String,
    /// Five-digit postal code.
    pub zip: String,
    pub email: Email,
    pub phone: String,
    /// Free-text delivery notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
