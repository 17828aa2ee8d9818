//! Catalog product reference data.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable product from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, never negative.
    pub price: Price,
    /// Image path served from `/static`.
    pub image: String,
    pub category: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            category: category.into(),
        }
    }
}
