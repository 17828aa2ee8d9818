//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (query: cart=open, menu=open, faq=<index>)
//! GET  /health                 - Health check
//!
//! # Cart (form posts, redirect back to the page)
//! GET  /cart                   - Redirect to the page with the drawer open
//! POST /cart/add               - Add one unit (product_id)
//! POST /cart/update            - Set quantity (product_id, quantity; < 1 removes)
//! POST /cart/remove            - Remove line (product_id)
//!
//! # Placeholders
//! POST /checkout               - "Checkout coming soon!"
//! POST /quote                  - "Quote form coming soon!"
//! POST /newsletter             - Newsletter signup (email)
//! ```

pub mod cart;
pub mod contact;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/cart", cart_routes())
        .route("/checkout", post(cart::checkout))
        .route("/quote", post(contact::request_quote))
        .route("/newsletter", post(contact::subscribe))
}
