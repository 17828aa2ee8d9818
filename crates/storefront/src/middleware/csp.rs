//! CSP nonce middleware.
//!
//! The page has exactly one inline script, the toast auto-dismiss in
//! `base.html`. Each request gets a fresh nonce that the template stamps on
//! that script and the `Content-Security-Policy` header allows.

use axum::{
    extract::{FromRequestParts, Request},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;

/// Random bytes per nonce (128 bits).
const NONCE_BYTES: usize = 16;

/// Per-request nonce, URL-safe base64 so it needs no escaping in attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CspNonce(pub String);

impl CspNonce {
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// The CSP source expression, e.g. `'nonce-AbC123'`.
    #[must_use]
    pub fn source(&self) -> String {
        format!("'nonce-{}'", self.0)
    }
}

/// Stores a fresh [`CspNonce`] in the request extensions.
///
/// Must wrap `security_headers_middleware` so the nonce exists when the CSP
/// header is built.
pub async fn csp_nonce_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(CspNonce::generate());
    next.run(request).await
}

/// Pulls the request's nonce for templates.
///
/// Rejects with 500 when the middleware is not installed: a page rendered
/// without a nonce would have its toast script blocked.
impl<S> FromRequestParts<S> for CspNonce
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Self>().cloned().ok_or_else(|| {
            tracing::error!("CSP nonce missing from request extensions");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        })
    }
}
