//! Bottega Core - domain types and the order rules engine.
//!
//! This crate is shared by both Bottega del Macellaio binaries:
//! - `storefront` - Public catalog, checkout and booking API
//! - `admin` - Internal administration API (token-gated)
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. Every pricing, geography and opening-hours decision in
//! the system lives here exactly once, so the storefront display, the payment
//! capture amount and the persisted order record cannot disagree.
//!
//! # Modules
//!
//! - [`types`] - Domain entities: addresses, line items, orders, reservations
//! - [`rules`] - Geography filter, shipping tiers, opening hours, order totals
//! - [`catalog`] - The static product catalog
//! - [`validation`] - Field-level validation for checkout and booking payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod rules;
pub mod types;
pub mod validation;

pub use types::*;
