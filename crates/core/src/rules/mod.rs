//! The order rules engine.
//!
//! Pure, synchronous business rules shared by every call site. The storefront
//! runs these before showing a checkout button; the API boundary runs them
//! again on submission because client-side checks are bypassable. Each rule
//! exists exactly once in this module tree.
//!
//! - [`geography`] - where the shop ships
//! - [`shipping`] - what shipping costs
//! - [`hours`] - when pickups can be booked
//! - [`totals`] - what an order comes to

pub mod geography;
pub mod hours;
pub mod shipping;
pub mod totals;

pub use geography::GeographyPolicy;
pub use hours::{OpenInterval, ScheduleError, WeeklySchedule};
pub use shipping::shipping_cost;
pub use totals::compose_totals;
