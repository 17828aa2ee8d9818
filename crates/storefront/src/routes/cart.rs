//! Cart route handlers.
//!
//! Cart mutations are plain form posts. Each handler applies one transition
//! to the session cart, queues the resulting notification, and redirects
//! back to the page (post/redirect/get), where the drawer and toasts render.

use axum::{Form, extract::State, response::Redirect};
use border3d_core::{Cart, CartOutcome, CartLine, Notification, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::PageState;
use crate::services::{SessionCart, notifications};
use crate::state::AppState;

/// Message for the placeholder checkout.
const CHECKOUT_MESSAGE: &str = "Checkout coming soon!";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub image: String,
    pub category: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    /// Quantity submitted by the minus button. 0 removes the line.
    pub decrement_quantity: i64,
    /// Quantity submitted by the plus button.
    pub increment_quantity: i64,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
    /// Number of distinct lines, shown in the drawer title.
    pub line_count: usize,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let quantity = line.quantity();
        Self {
            product_id: line.product_id.as_i32(),
            name: line.name.clone(),
            image: line.image.clone(),
            category: line.category.clone(),
            quantity,
            price: line.unit_price.to_string(),
            line_price: line.line_total().to_string(),
            decrement_quantity: i64::from(quantity) - 1,
            increment_quantity: i64::from(quantity) + 1,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let totals = cart.totals();
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: totals.subtotal.to_string(),
            item_count: totals.item_count,
            line_count: cart.lines().len(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Update quantity form data. Any integer is accepted; below 1 removes.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

// =============================================================================
// Helpers
// =============================================================================

/// Where the browser lands after changing the drawer contents.
fn drawer_href() -> String {
    PageState::cart_open().href(Some("cart"))
}

/// Queue the notification for `outcome`, if it has one.
async fn notify(
    session: &Session,
    outcome: &CartOutcome,
) -> std::result::Result<(), tower_sessions::session::Error> {
    if let Some(notification) = outcome.notification() {
        notifications::push(session, notification).await?;
    }
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// Open the cart drawer.
pub async fn show() -> Redirect {
    Redirect::to(&drawer_href())
}

/// Add one unit of a catalog product.
///
/// # Errors
///
/// Returns `NotFound` for a product ID that is not in the catalog.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product_id = form.product_id;
    let product = state
        .catalog()
        .product(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mutation = SessionCart::new(&session).add_item(product).await?;
    notify(&session, &mutation.outcome).await?;

    let id = product_id.to_string();
    add_breadcrumb("cart", "Added item", Some(&[("product_id", id.as_str())][..]));
    tracing::info!(
        product_id = %product_id,
        item_count = mutation.cart.totals().item_count,
        "Added to cart"
    );

    Ok(Redirect::to("/#shop"))
}

/// Set a line's quantity.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let product_id = form.product_id;

    let mutation = SessionCart::new(&session)
        .update_quantity(product_id, form.quantity)
        .await?;
    notify(&session, &mutation.outcome).await?;

    if let CartOutcome::LineNotFound { .. } = mutation.outcome {
        tracing::debug!(product_id = %product_id, "Quantity update for product not in cart");
    } else {
        let id = product_id.to_string();
        add_breadcrumb("cart", "Updated quantity", Some(&[("product_id", id.as_str())][..]));
    }

    Ok(Redirect::to(&drawer_href()))
}

/// Remove a line. Always notifies, even if the product was not in the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let product_id = form.product_id;

    let mutation = SessionCart::new(&session).remove_item(product_id).await?;
    notify(&session, &mutation.outcome).await?;

    let id = product_id.to_string();
    add_breadcrumb("cart", "Removed item", Some(&[("product_id", id.as_str())][..]));

    Ok(Redirect::to(&drawer_href()))
}

/// Placeholder checkout: there is no payment integration yet.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Result<Redirect> {
    notifications::push(&session, Notification::info(CHECKOUT_MESSAGE)).await?;
    Ok(Redirect::to(&drawer_href()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use border3d_core::{Price, Product};

    use super::*;

    fn product(id: i32, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Price::usd_cents(cents),
            format!("/static/images/{id}.jpg"),
            "Miniatures",
        )
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());

        assert!(view.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
        assert_eq!(view.line_count, 0);
    }

    #[test]
    fn test_cart_view_counts_lines_and_items() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 225)).unwrap();
        cart.add_item(&product(1, 225)).unwrap();
        cart.add_item(&product(3, 800)).unwrap();

        let view = CartView::from(&cart);

        assert_eq!(view.line_count, 2);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$12.50");
        assert_eq!(view.items[0].price, "$2.25");
        assert_eq!(view.items[0].line_price, "$4.50");
    }

    #[test]
    fn test_item_view_quantity_buttons() {
        let mut cart = Cart::new();
        cart.add_item(&product(4, 1000)).unwrap();

        let item = CartItemView::from(&cart.lines()[0]);

        assert_eq!(item.quantity, 1);
        // Minus on a single item submits 0, which removes the line
        assert_eq!(item.decrement_quantity, 0);
        assert_eq!(item.increment_quantity, 2);
    }

    #[test]
    fn test_drawer_href() {
        assert_eq!(drawer_href(), "/?cart=open#cart");
    }
}
