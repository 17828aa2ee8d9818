//! Border3D Core - Shared types and cart state.
//!
//! This crate provides the domain types used by the Border3D storefront:
//! - `storefront` - Public-facing marketing site and shop
//! - `integration-tests` - End-to-end HTTP tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no sessions, no HTTP. This keeps the cart logic testable on its own.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails and products
//! - [`cart`] - The cart store: lines, derived totals and mutations
//! - [`notification`] - User-facing notifications derived from cart outcomes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod notification;
pub mod types;

pub use cart::{Cart, CartError, CartLine, CartOutcome, CartTotals};
pub use notification::{Notification, NotificationKind};
pub use types::*;
