//! Shopping cart state.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s, one per product, in the
//! order each product was first added. Item count and subtotal are always
//! computed from the lines on demand ([`Cart::totals`]).
//!
//! Mutations are pure transitions: they change the cart and return a
//! [`CartOutcome`] describing what happened. Turning an outcome into a
//! user-facing [`Notification`] is left to the caller.
//!
//! # Invariants
//!
//! - At most one line per [`ProductId`]
//! - Every line has `quantity >= 1`; lines that would drop below 1 are removed
//!
//! # Example
//!
//! ```
//! use border3d_core::{Cart, Price, Product, ProductId};
//!
//! let hussar = Product::new(
//!     ProductId::new(3),
//!     "The Winged Hussar",
//!     Price::usd_cents(800),
//!     "/static/images/product-hussar.jpg",
//!     "Miniatures",
//! );
//!
//! let mut cart = Cart::new();
//! cart.add_item(&hussar)?;
//! cart.add_item(&hussar)?;
//!
//! let totals = cart.totals();
//! assert_eq!(totals.item_count, 2);
//! assert_eq!(totals.subtotal, Price::usd_cents(1600));
//! # Ok::<(), border3d_core::CartError>(())
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notification::Notification;
use crate::types::{CurrencyCode, Price, Product, ProductId};

/// Message shown whenever a line is removed.
pub const REMOVED_MESSAGE: &str = "Item removed from cart";

/// Errors from cart mutations. The cart is left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The requested quantity cannot be represented on a cart line.
    #[error("quantity {requested} for product {product_id} is out of range")]
    QuantityOutOfRange {
        product_id: ProductId,
        requested: i64,
    },
}

/// One product's presence in the cart.
///
/// Display attributes are captured when the product is first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub image: String,
    pub category: String,
    quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }

    /// Quantity of this line. Always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `quantity × unit_price`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Values derived from the current lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub item_count: u64,
    /// Sum of `quantity × unit_price` over all lines, before shipping and tax.
    pub subtotal: Price,
}

/// What a cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    /// A product was added, either as a new line or by incrementing one.
    Added {
        product_id: ProductId,
        name: String,
        quantity: u32,
    },
    /// A line's quantity was set.
    Updated { product_id: ProductId, quantity: u32 },
    /// A removal was requested. `existed` is false when there was no line.
    Removed { product_id: ProductId, existed: bool },
    /// An update targeted a product that has no line. Nothing changed.
    LineNotFound { product_id: ProductId },
}

impl CartOutcome {
    /// The notification to show for this outcome, if any.
    ///
    /// Removals always notify, even when no line existed.
    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::Added { name, .. } => Some(Notification::success(format!("{name} added to cart!"))),
            Self::Removed { .. } => Some(Notification::info(REMOVED_MESSAGE)),
            Self::Updated { .. } | Self::LineNotFound { .. } => None,
        }
    }

    /// Whether the cart contents changed.
    #[must_use]
    pub const fn changed(&self) -> bool {
        match self {
            Self::Added { .. } | Self::Updated { .. } => true,
            Self::Removed { existed, .. } => *existed,
            Self::LineNotFound { .. } => false,
        }
    }
}

/// An ordered collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in order of first add.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line, or appends a new line with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOutOfRange`] if the line is already at
    /// `u32::MAX`.
    pub fn add_item(&mut self, product: &Product) -> Result<CartOutcome, CartError> {
        let quantity = if let Some(line) = self.line_mut(product.id) {
            let next = line
                .quantity
                .checked_add(1)
                .ok_or(CartError::QuantityOutOfRange {
                    product_id: product.id,
                    requested: i64::from(line.quantity) + 1,
                })?;
            line.quantity = next;
            next
        } else {
            self.lines.push(CartLine::from_product(product));
            1
        };

        Ok(CartOutcome::Added {
            product_id: product.id,
            name: product.name.clone(),
            quantity,
        })
    }

    /// Set the quantity of a line to exactly `new_quantity`.
    ///
    /// A quantity below 1 removes the line, exactly as [`Cart::remove_item`].
    /// Updating a product with no line changes nothing and returns
    /// [`CartOutcome::LineNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOutOfRange`] if `new_quantity` exceeds
    /// `u32::MAX`.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        new_quantity: i64,
    ) -> Result<CartOutcome, CartError> {
        if new_quantity < 1 {
            return Ok(self.remove_item(product_id));
        }

        let quantity = u32::try_from(new_quantity).map_err(|_| CartError::QuantityOutOfRange {
            product_id,
            requested: new_quantity,
        })?;

        let Some(line) = self.line_mut(product_id) else {
            return Ok(CartOutcome::LineNotFound { product_id });
        };
        line.quantity = quantity;

        Ok(CartOutcome::Updated {
            product_id,
            quantity,
        })
    }

    /// Remove the line for `product_id`, if any.
    pub fn remove_item(&mut self, product_id: ProductId) -> CartOutcome {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);

        CartOutcome::Removed {
            product_id,
            existed: self.lines.len() != before,
        }
    }

    /// Item count and subtotal, computed from the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let currency_code = self
            .lines
            .first()
            .map_or(CurrencyCode::default(), |line| line.unit_price.currency_code);

        CartTotals {
            item_count: self.lines.iter().map(|line| u64::from(line.quantity)).sum(),
            subtotal: Price::new(
                self.lines
                    .iter()
                    .map(|line| line.line_total().amount)
                    .sum::<Decimal>(),
                currency_code,
            ),
        }
    }
}
