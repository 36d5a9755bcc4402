//! Outgoing request decorators shared by every call.

pub mod auth;
pub mod request_id;

// Re-export commonly used types
pub use auth::{AuthHeaders, AuthRequirement, ADMIN_AUTHORIZATION_HEADER};
pub use request_id::{request_span, RequestId, REQUEST_ID_HEADER};
