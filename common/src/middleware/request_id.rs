//! Request ID tagging.
//!
//! Every outgoing call carries a fresh request ID in the `X-Request-ID`
//! header and runs inside a tracing span keyed by the same ID, so client and
//! server logs can be correlated.

use reqwest::header::HeaderName;
use tracing::Span;
use uuid::Uuid;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Tracing span for one exchange.
///
/// # Arguments
/// * `request_id` - ID sent with the request
/// * `path` - Endpoint path, e.g. `/set/get`
pub fn request_span(request_id: &RequestId, path: &str) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = "POST",
        path = %path,
    )
}

/// Request ID wrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Returns the request ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates a new random request ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::from("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }
}
