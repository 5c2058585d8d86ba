//! Core domain types.
//!
//! Wire-facing structs use camelCase field names to match the storefront
//! client payloads.

pub mod address;
pub mod email;
pub mod line_item;
pub mod order;
pub mod price;
pub mod product;
pub mod reservation;
pub mod shop_status;

pub use address::Address;
pub use email::{Email, EmailError};
pub use line_item::{LineItem, OrderTotals};
pub use order::{Order, OrderStatus};
pub use price::{CurrencyCode, Price};
pub use product::{Product, ProductCategory};
pub use reservation::{PickupRequest, Reservation, ReservationStatus};
pub use shop_status::ShopStatus;
