//! Response construction.
//!
//! # Responsibilities
//! - Write a selected reply's status and body
//! - Build the fixed CORS preflight reply for OPTIONS requests

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Headers sent on every OPTIONS reply, regardless of route type.
pub const CORS_HEADERS: [(header::HeaderName, &str); 6] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "*"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "*, Authorization"),
    (header::ACCESS_CONTROL_MAX_AGE, "60"),
    (
        header::CACHE_CONTROL,
        "no-store, no-cache, must-revalidate, post-check=0, pre-check=0",
    ),
    (header::VARY, "Accept-Encoding"),
];

/// 204 with the CORS headers and no body.
pub fn cors_preflight() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}

/// A stubbed reply: status plus raw body bytes.
pub fn stub(status: StatusCode, body: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_preflight() {
        let response = cors_preflight();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers().len(), 6);
        assert_eq!(
            response.headers()["access-control-allow-headers"],
            "*, Authorization"
        );
        assert_eq!(response.headers()["access-control-max-age"], "60");
    }

    #[test]
    fn test_stub() {
        let response = stub(StatusCode::UNAUTHORIZED, b"nope".to_vec());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
