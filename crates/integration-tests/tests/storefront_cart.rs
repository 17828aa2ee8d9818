//! Integration tests for the cart drawer.
//!
//! Each test drives the storefront the way a browser would: submit a form,
//! follow the redirect, and inspect the rendered page.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use border3d_core::{Price, ProductId};
use border3d_integration_tests::TestApp;
use border3d_storefront::content::Catalog;

/// Number of non-overlapping occurrences of `needle` in `haystack`.
fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// =============================================================================
// Adding
// =============================================================================

#[tokio::test]
async fn test_empty_cart_drawer() {
    let mut app = TestApp::new();

    let page = app.get("/?cart=open").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Your Cart (0)"));
    assert!(page.body.contains("Your cart is empty"));
    assert!(page.body.contains("Continue Shopping"));
    assert!(!page.body.contains("Shipping calculated at checkout"));
}

#[tokio::test]
async fn test_add_redirects_to_shop() {
    let mut app = TestApp::new();

    let response = app.post_form("/cart/add", "product_id=1").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/#shop"));
}

#[tokio::test]
async fn test_add_merges_lines_and_totals() {
    let mut app = TestApp::new();

    app.submit("/cart/add", "product_id=1").await;
    app.submit("/cart/add", "product_id=1").await;
    app.submit("/cart/add", "product_id=3").await;

    let page = app.get("/?cart=open").await;

    let catalog = Catalog::border3d();
    let kingsguard = catalog.product(ProductId::new(1)).unwrap().price;
    let hussar = catalog.product(ProductId::new(3)).unwrap().price;
    let subtotal = Price::new(
        kingsguard.times(2).amount + hussar.amount,
        kingsguard.currency_code,
    );
    assert_eq!(kingsguard.times(2).to_string(), "$4.50");
    assert_eq!(subtotal.to_string(), "$12.50");

    assert!(page.body.contains("Your Cart (2)"));
    assert!(page.body.contains(&kingsguard.times(2).to_string()));
    assert!(page.body.contains(&subtotal.to_string()));
    assert!(page.body.contains("Shipping calculated at checkout"));
    assert!(!page.body.contains("Your cart is empty"));
    // Nav badge shows the total quantity
    assert!(page.body.contains(r#"<span class="cart-badge">3</span>"#));
}

#[tokio::test]
async fn test_add_shows_success_toast_once() {
    let mut app = TestApp::new();

    let page = app.submit("/cart/add", "product_id=3").await;
    assert!(page.body.contains("The Winged Hussar added to cart!"));
    assert!(page.body.contains("toast-success"));

    let reload = app.get("/").await;
    assert!(!reload.body.contains("added to cart!"));
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let mut app = TestApp::new();

    let response = app.post_form("/cart/add", "product_id=99").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let page = app.get("/?cart=open").await;
    assert!(page.body.contains("Your cart is empty"));
}

// =============================================================================
// Updating
// =============================================================================

#[tokio::test]
async fn test_update_sets_absolute_quantity() {
    let mut app = TestApp::new();
    app.submit("/cart/add", "product_id=1").await;

    let response = app
        .post_form("/cart/update", "product_id=1&quantity=5")
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/?cart=open#cart"));

    let page = app.get("/?cart=open").await;
    assert!(page.body.contains(r#"<span class="quantity-value">5</span>"#));
    assert!(page.body.contains("$11.25"));
    // A quantity change is silent
    assert!(!page.body.contains("toast-message"));
}

#[tokio::test]
async fn test_update_to_zero_removes_line() {
    let mut app = TestApp::new();
    app.submit("/cart/add", "product_id=1").await;

    let page = app
        .submit("/cart/update", "product_id=1&quantity=0")
        .await;

    assert!(page.body.contains("Your cart is empty"));
    assert!(page.body.contains("Item removed from cart"));
    assert!(page.body.contains("toast-info"));
}

#[tokio::test]
async fn test_update_negative_quantity_removes_line() {
    let mut app = TestApp::new();
    app.submit("/cart/add", "product_id=4").await;

    let page = app
        .submit("/cart/update", "product_id=4&quantity=-3")
        .await;

    assert!(page.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_update_missing_line_is_noop() {
    let mut app = TestApp::new();
    app.submit("/cart/add", "product_id=1").await;

    let page = app
        .submit("/cart/update", "product_id=2&quantity=4")
        .await;

    assert!(page.body.contains("Your Cart (1)"));
    assert!(!page.body.contains("Remove Dwarf Veterans Unit"));
    assert!(!page.body.contains("toast-message"));
}

#[tokio::test]
async fn test_update_rejects_non_numeric_quantity() {
    let mut app = TestApp::new();
    app.submit("/cart/add", "product_id=1").await;

    let response = app
        .post_form("/cart/update", "product_id=1&quantity=lots")
        .await;

    assert!(response.status.is_client_error());
}

// =============================================================================
// Removing
// =============================================================================

#[tokio::test]
async fn test_remove_twice_notifies_both_times() {
    let mut app = TestApp::new();
    app.submit("/cart/add", "product_id=2").await;

    let first = app.submit("/cart/remove", "product_id=2").await;
    assert!(first.body.contains("Your cart is empty"));
    assert!(first.body.contains("Item removed from cart"));

    let second = app.submit("/cart/remove", "product_id=2").await;
    assert!(second.body.contains("Your cart is empty"));
    assert_eq!(count(&second.body, "Item removed from cart"), 1);
}

#[tokio::test]
async fn test_remove_keeps_other_lines_in_order() {
    let mut app = TestApp::new();
    app.submit("/cart/add", "product_id=1").await;
    app.submit("/cart/add", "product_id=3").await;
    app.submit("/cart/add", "product_id=4").await;

    let page = app.submit("/cart/remove", "product_id=3").await;

    // Remove buttons only render in the drawer
    let first = page.body.find("Remove Dwarf Kingsguard - Sons of Ymir");
    let last = page.body.find("Remove Skeleton Spearmen Command");
    assert!(page.body.contains("Your Cart (2)"));
    assert!(!page.body.contains("Remove The Winged Hussar"));
    assert!(first.is_some() && last.is_some());
    assert!(first < last);
    assert!(page.body.contains("$12.25"));
}

// =============================================================================
// Drawer and checkout
// =============================================================================

#[tokio::test]
async fn test_cart_page_opens_drawer() {
    let mut app = TestApp::new();

    let response = app.get("/cart").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/?cart=open#cart"));
}

#[tokio::test]
async fn test_drawer_closed_by_default() {
    let mut app = TestApp::new();
    app.submit("/cart/add", "product_id=1").await;

    let page = app.get("/").await;

    assert!(!page.body.contains(r#"id="cart""#));
    assert!(page.body.contains(r#"<span class="cart-badge">1</span>"#));
}

#[tokio::test]
async fn test_checkout_placeholder_keeps_cart() {
    let mut app = TestApp::new();
    app.submit("/cart/add", "product_id=3").await;

    let page = app.submit("/checkout", "").await;

    assert!(page.body.contains("Checkout coming soon!"));
    assert!(page.body.contains("Your Cart (1)"));
    assert!(page.body.contains("$8.00"));
}

#[tokio::test]
async fn test_visitors_have_separate_carts() {
    let mut alice = TestApp::new();
    let mut bob = alice.new_visitor();

    alice.submit("/cart/add", "product_id=1").await;

    let page = bob.get("/?cart=open").await;
    assert!(page.body.contains("Your cart is empty"));

    let page = alice.get("/?cart=open").await;
    assert!(page.body.contains("Your Cart (1)"));
}
