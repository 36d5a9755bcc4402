//! Credential models.
//!
//! A credential is a username/password pair rendered as HTTP Basic auth.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

/// A (username, password) pair.
///
/// Used both for the administrative credential configured on the client and
/// for per-database credentials carried by a [`DatabaseRef`](super::DatabaseRef).
/// The two are never merged or substituted for one another.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    /// Creates a new credential.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Renders `Basic base64(username:password)` (RFC 7617).
    pub fn basic_auth_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", general_purpose::STANDARD.encode(raw.as_bytes()))
    }

    /// Parses a `Basic ...` header value back into a credential.
    pub fn from_basic_auth_value(value: &str) -> Option<Self> {
        let encoded = value.strip_prefix("Basic ")?;
        let decoded = general_purpose::STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(Self::new(username, password))
    }
}

// Password never reaches logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
