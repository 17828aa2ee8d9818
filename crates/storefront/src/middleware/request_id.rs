//! Request ID middleware.
//!
//! Every response carries an `x-request-id`. An ID from an upstream proxy is
//! kept when it is short printable ASCII; otherwise a UUID v4 is minted. The
//! ID is recorded on the request span and tagged on the Sentry scope, so log
//! lines, Sentry events and the client's response can be matched up.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID we will echo back.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Ensure every request has an ID and echo it on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id =
        upstream_request_id(request.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// The caller's request ID, if present and safe to log and echo.
fn upstream_request_id(headers: &HeaderMap) -> Option<String> {
    let id = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?;
    let acceptable = !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic());
    acceptable.then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(id).unwrap_or_else(|_| {
            HeaderValue::from_static("invalid")
        }));
        headers
    }

    #[test]
    fn test_upstream_id_kept() {
        assert_eq!(
            upstream_request_id(&headers_with("lb-7f3a-0001")).as_deref(),
            Some("lb-7f3a-0001")
        );
    }

    #[test]
    fn test_missing_or_unusable_ids_rejected() {
        assert_eq!(upstream_request_id(&HeaderMap::new()), None);
        assert_eq!(upstream_request_id(&headers_with("")), None);
        assert_eq!(upstream_request_id(&headers_with("has space")), None);
        assert_eq!(upstream_request_id(&headers_with(&"a".repeat(129))), None);
        assert!(upstream_request_id(&headers_with(&"a".repeat(128))).is_some());
    }
}
