//! Session storage keys.
//!
//! The session holds all per-visitor state. It lives in process memory and
//! ends with the browser session.

/// Key for the visitor's [`Cart`](border3d_core::Cart).
pub const CART: &str = "cart";

/// Key for queued [`Notification`](border3d_core::Notification)s awaiting display.
pub const NOTIFICATIONS: &str = "notifications";
