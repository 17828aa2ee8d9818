//! Integration tests for the storefront page, contact forms, and
//! cross-cutting middleware.

use axum::http::StatusCode;
use border3d_integration_tests::TestApp;

// =============================================================================
// Health and middleware
// =============================================================================

#[tokio::test]
async fn test_health() {
    let mut app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_security_headers() {
    let mut app = TestApp::new();

    let response = app.get("/").await;

    assert_eq!(response.header("x-frame-options"), Some("DENY"));
    assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
    assert_eq!(response.header("cache-control"), Some("no-store, max-age=0"));

    let csp = response.header("content-security-policy").unwrap_or_default();
    assert!(csp.contains("default-src 'none'"));
    assert!(csp.contains("'nonce-"));
}

#[tokio::test]
async fn test_script_nonce_matches_csp() {
    let mut app = TestApp::new();

    let response = app.get("/").await;

    let csp = response.header("content-security-policy").unwrap_or_default();
    let nonce = csp
        .split("'nonce-")
        .nth(1)
        .and_then(|rest| rest.split('\'').next())
        .unwrap_or_default();
    assert!(!nonce.is_empty());
    assert!(response.body.contains(&format!(r#"<script nonce="{nonce}">"#)));
}

#[tokio::test]
async fn test_request_id_generated() {
    let mut app = TestApp::new();

    let response = app.get("/health").await;

    let id = response.header("x-request-id").unwrap_or_default();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let mut app = TestApp::new();

    let response = app
        .get_with_headers("/health", &[("x-request-id", "upstream-123")])
        .await;

    assert_eq!(response.header("x-request-id"), Some("upstream-123"));
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let mut app = TestApp::new();

    let response = app.get("/admin").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stylesheet_served() {
    let mut app = TestApp::new();

    let response = app.get("/static/css/main.css").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(".cart-drawer"));
}

#[tokio::test]
async fn test_page_images_served() {
    let mut app = TestApp::new();

    let page = app.get("/").await;
    let images: Vec<String> = page
        .body
        .split(r#"src=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|src| src.starts_with("/static/images/"))
        .map(str::to_string)
        .collect();

    // Hero, categories, products, and portfolio
    assert!(images.len() >= 13, "found {images:?}");

    for image in images {
        let response = app.get(&image).await;
        assert_eq!(response.status, StatusCode::OK, "{image}");
        assert_eq!(response.header("content-type"), Some("image/svg+xml"), "{image}");
    }
}

// =============================================================================
// Page content and state
// =============================================================================

#[tokio::test]
async fn test_home_renders_sections() {
    let mut app = TestApp::new();

    let page = app.get("/").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Free shipping on all products over $50"));
    assert!(page.body.contains("What We Create"));
    assert!(page.body.contains("How It Works"));
    assert!(page.body.contains("Featured Collection"));
    assert!(page.body.contains("From $2.25 USD"));
    assert!(page.body.contains("$140.00 USD"));
    assert!(page.body.contains("Frequently Asked Questions"));
    // Panels are closed until asked for
    assert!(!page.body.contains(r#"class="mobile-menu""#));
    assert!(!page.body.contains(r#"class="faq-answer""#));
}

#[tokio::test]
async fn test_menu_open() {
    let mut app = TestApp::new();

    let page = app.get("/?menu=open").await;

    assert!(page.body.contains(r#"class="mobile-menu""#));
    // The toggle now closes it
    assert!(page.body.contains(r#"<a class="menu-toggle" href="/""#));
}

#[tokio::test]
async fn test_faq_single_open() {
    let mut app = TestApp::new();

    let page = app.get("/?faq=2").await;

    assert_eq!(page.body.matches(r#"class="faq-answer""#).count(), 1);
    assert!(page.body.contains("durable PLA/PETG filament"));
    assert!(!page.body.contains("STL, OBJ, and 3MF"));
}

#[tokio::test]
async fn test_faq_out_of_range_renders_closed() {
    let mut app = TestApp::new();

    let page = app.get("/?faq=42").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(!page.body.contains(r#"class="faq-answer""#));
}

#[tokio::test]
async fn test_faq_malformed_renders_closed() {
    let mut app = TestApp::new();

    for uri in ["/?faq=abc", "/?faq=", "/?faq=-1", "/?faq=abc&cart=open"] {
        let page = app.get(uri).await;

        assert_eq!(page.status, StatusCode::OK, "{uri}");
        assert!(!page.body.contains(r#"class="faq-answer""#), "{uri}");
    }

    // Other toggles still apply
    let page = app.get("/?faq=abc&cart=open").await;
    assert!(page.body.contains("Your cart is empty"));
}

// =============================================================================
// Contact forms
// =============================================================================

#[tokio::test]
async fn test_newsletter_valid_email() {
    let mut app = TestApp::new();

    let response = app
        .post_form("/newsletter", "email=Collector%40Example.com")
        .await;
    assert_eq!(response.location(), Some("/#newsletter"));

    let page = app.get("/").await;
    assert!(page.body.contains("Subscribed successfully!"));
    assert!(page.body.contains("toast-success"));
}

#[tokio::test]
async fn test_newsletter_invalid_email() {
    let mut app = TestApp::new();

    let page = app.submit("/newsletter", "email=not-an-email").await;

    assert!(page.body.contains("Please enter a valid email address."));
    assert!(page.body.contains("toast-error"));
}

#[tokio::test]
async fn test_quote_returns_to_section() {
    let mut app = TestApp::new();

    let response = app.post_form("/quote", "section=contact").await;
    assert_eq!(response.location(), Some("/#contact"));

    let page = app.get("/").await;
    assert!(page.body.contains("Quote form coming soon!"));
    assert!(page.body.contains("toast-info"));
}

#[tokio::test]
async fn test_quote_ignores_unknown_section() {
    let mut app = TestApp::new();

    let response = app.post_form("/quote", "section=%2F%2Fevil.example").await;

    assert_eq!(response.location(), Some("/#quote"));
}
