//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Expose the ID to handlers for structured logging
//! - Decode the request path before it is matched
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Client-supplied IDs are kept and echoed back

use std::borrow::Cow;

use axum::http::{HeaderValue, Request, Uri};
use percent_encoding::percent_decode_str;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Read the request ID off a request.
pub trait RequestIdExt {
    fn request_id(&self) -> &str;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> &str {
        self.headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

/// Percent-decoded URI path, as routes are configured in plain text.
///
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub fn decoded_path(uri: &Uri) -> Cow<'_, str> {
    percent_decode_str(uri.path()).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_generates_uuid() {
        let req = Request::new(Body::empty());
        let id = UuidRequestId.make_request_id(&req).unwrap();
        let id = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_request_id_ext() {
        let req = Request::builder()
            .header(X_REQUEST_ID, "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(req.request_id(), "abc-123");

        let req = Request::new(Body::empty());
        assert_eq!(req.request_id(), "unknown");
    }

    #[test]
    fn test_decoded_path() {
        let uri: Uri = "/v1/hello%20world?x=%20".parse().unwrap();
        assert_eq!(decoded_path(&uri), "/v1/hello world");

        let uri: Uri = "/v1/caf%C3%A9".parse().unwrap();
        assert_eq!(decoded_path(&uri), "/v1/café");

        let uri: Uri = "/v1/plain".parse().unwrap();
        assert!(matches!(decoded_path(&uri), Cow::Borrowed("/v1/plain")));
    }
}
