//! Integration tests for the Border3D storefront.
//!
//! The storefront router is driven in-process with `tower::ServiceExt`, so
//! no server or network is needed. [`TestApp`] carries the session cookie
//! between requests the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p border3d-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart drawer, quantities, notifications
//! - `storefront_pages` - Page state, contact forms, headers

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use border3d_storefront::config::StorefrontConfig;
use border3d_storefront::content::Catalog;
use border3d_storefront::state::AppState;
use tower::ServiceExt;

/// Upper bound on response bodies read by tests.
const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// A response with its body collected as text.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    /// A response header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// One visitor's browser talking to a fresh storefront.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    /// Start a storefront with the Border3D catalog and an empty session store.
    #[must_use]
    pub fn new() -> Self {
        let mut config = StorefrontConfig::local();
        config.static_dir =
            PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static"));

        let state = AppState::new(config, Catalog::border3d());
        Self {
            router: border3d_storefront::app(state),
            cookie: None,
        }
    }

    /// Another visitor on the same server, with no session cookie.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self
            .request_builder("GET", uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// Send a GET request with extra headers.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn get_with_headers(&mut self, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = self.request_builder("GET", uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).expect("valid request");
        self.send(request).await
    }

    /// Submit an `application/x-www-form-urlencoded` form.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        let request = self
            .request_builder("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    /// Submit a form and then load the page it redirects to, like a browser.
    ///
    /// # Panics
    ///
    /// Panics if the form response is not a redirect.
    pub async fn submit(&mut self, uri: &str, form: &str) -> TestResponse {
        let response = self.post_form(uri, form).await;
        assert!(
            response.status.is_redirection(),
            "expected redirect from {uri}, got {}",
            response.status
        );
        let location = response.location().expect("redirect has a location");
        // Browsers keep the fragment to themselves
        let path = location.split('#').next().unwrap_or(location).to_string();
        self.get(&path).await
    }

    fn request_builder(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie.as_str()),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
        {
            self.cookie = Some(cookie.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
