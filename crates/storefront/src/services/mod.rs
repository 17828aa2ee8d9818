//! Business logic services for the storefront.
//!
//! # Services
//!
//! - [`cart`] - Session-backed cart store
//! - [`notifications`] - Flash notification queue

pub mod cart;
pub mod notifications;

pub use cart::{CartMutation, CartServiceError, SessionCart};
