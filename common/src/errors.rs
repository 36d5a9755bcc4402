//! Client error types.
//!
//! Every failure a call can produce is one of these variants, so callers can
//! branch on "retry network" vs. "fix request" vs. "treat as absent".

use serde::Deserialize;
use thiserror::Error;

/// Error code the server uses when a key does not exist in a set.
pub const KEY_NOT_FOUND: &str = "KEY_NOT_FOUND";

/// Result alias used throughout the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the setbase client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-200 HTTP status.
    #[error("HTTP error: {status} - {body}")]
    Transport {
        status: u16,
        /// Structured error code from the body, when the body carried one.
        code: Option<String>,
        /// Server message from the body, when the body carried one.
        message: Option<String>,
        body: String,
    },

    /// The request never produced an HTTP status (connect failure, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 200, but the body's status discriminator was not `success`.
    #[error("server error: {message}")]
    Application {
        code: Option<String>,
        message: String,
    },

    /// Sort direction list does not match the sort field list.
    #[error("sort direction list has {actual} entries, expected {expected} (one per sort field)")]
    SortArityMismatch { expected: usize, actual: usize },

    /// Malformed arguments detected before any network call.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Body was not JSON, or not the shape the endpoint contracts.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Bad client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error body shape: `{"status":"error","code":"...","message":"..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ClientError {
    /// Builds a transport error, extracting the structured code and message
    /// from the body if it parses as the server's error shape.
    pub fn transport(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let (code, message) = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => (parsed.code, parsed.message),
            Err(_) => (None, None),
        };
        ClientError::Transport {
            status,
            code,
            message,
            body,
        }
    }

    /// Builds an application error from the server's message and code.
    pub fn application(code: Option<String>, message: Option<String>) -> Self {
        ClientError::Application {
            message: message
                .or_else(|| code.clone())
                .unwrap_or_else(|| "unknown error".to_string()),
            code,
        }
    }

    /// True for non-200 responses and failed exchanges.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. } | ClientError::Network(_))
    }

    /// True for HTTP 200 responses carrying a non-success status.
    pub fn is_application(&self) -> bool {
        matches!(self, ClientError::Application { .. })
    }

    /// True for errors detected locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClientError::SortArityMismatch { .. } | ClientError::Validation(_)
        )
    }

    /// HTTP status of a transport error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured server error code, whichever way the server reported it.
    pub fn server_code(&self) -> Option<&str> {
        match self {
            ClientError::Transport { code, .. } | ClientError::Application { code, .. } => {
                code.as_deref()
            }
            _ => None,
        }
    }

    /// Server message verbatim, whichever way the server reported it.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Transport { message, .. } => message.as_deref(),
            ClientError::Application { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// True when the server reported a missing key.
    pub fn is_key_not_found(&self) -> bool {
        self.server_code() == Some(KEY_NOT_FOUND)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ClientError::transport(status.as_u16(), e.to_string()),
            None if e.is_decode() => ClientError::Decode(e.to_string()),
            None => ClientError::Network(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(e: validator::ValidationErrors) -> Self {
        ClientError::Validation(e.to_string())
    }
}
