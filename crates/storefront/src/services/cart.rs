//! Session-backed cart store.
//!
//! Each visitor's [`Cart`] is kept in their session. A mutation loads the
//! cart, applies one pure transition from `border3d_core::cart`, and writes
//! the cart back only if it changed. Notifications are left to the caller,
//! which decides how to display them from the returned [`CartOutcome`].

use border3d_core::{Cart, CartError, CartOutcome, Product, ProductId};
use thiserror::Error;
use tower_sessions::Session;

use crate::models::session_keys;

/// Errors from session cart operations.
#[derive(Debug, Error)]
pub enum CartServiceError {
    /// Reading or writing the session failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The transition was rejected. The stored cart is unchanged.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// The cart after a mutation, and what the mutation did.
#[derive(Debug, Clone)]
pub struct CartMutation {
    pub cart: Cart,
    pub outcome: CartOutcome,
}

/// A visitor's cart, stored in their session.
pub struct SessionCart<'a> {
    session: &'a Session,
}

impl<'a> SessionCart<'a> {
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Load the current cart. A new session starts with an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn load(&self) -> Result<Cart, tower_sessions::session::Error> {
        Ok(self
            .session
            .get::<Cart>(session_keys::CART)
            .await?
            .unwrap_or_default())
    }

    /// Add one unit of `product`.
    ///
    /// # Errors
    ///
    /// See [`Cart::add_item`]; also fails if the session store fails.
    pub async fn add_item(&self, product: &Product) -> Result<CartMutation, CartServiceError> {
        self.apply(|cart| cart.add_item(product)).await
    }

    /// Set a line's quantity. Quantities below 1 remove the line.
    ///
    /// # Errors
    ///
    /// See [`Cart::update_quantity`]; also fails if the session store fails.
    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartMutation, CartServiceError> {
        self.apply(|cart| cart.update_quantity(product_id, quantity))
            .await
    }

    /// Remove a line, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn remove_item(&self, product_id: ProductId) -> Result<CartMutation, CartServiceError> {
        self.apply(|cart| Ok(cart.remove_item(product_id))).await
    }

    async fn apply(
        &self,
        transition: impl FnOnce(&mut Cart) -> Result<CartOutcome, CartError>,
    ) -> Result<CartMutation, CartServiceError> {
        let mut cart = self.load().await?;
        let outcome = transition(&mut cart)?;

        if outcome.changed() {
            self.session.insert(session_keys::CART, &cart).await?;
        }

        let totals = cart.totals();
        tracing::debug!(
            ?outcome,
            lines = cart.lines().len(),
            item_count = totals.item_count,
            subtotal = %totals.subtotal,
            "Cart transition applied"
        );

        Ok(CartMutation { cart, outcome })
    }
}
