//! Server response envelopes.
//!
//! Each endpoint wraps its payload differently. These types describe the raw
//! shapes; the client's normalizer turns them into the stable result types in
//! [`crate::models`].

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::errors::{ClientError, ClientResult};
use crate::models::{Ack, BackupInfo, Entry};

/// Status discriminator value on every successful response.
pub const SUCCESS_STATUS: &str = "success";

/// Standard envelope: `{"status", "code"?, "message"?, "data"?}`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// `"success"` or `"error"`.
    pub status: String,

    /// Error code on failure (e.g. "KEY_NOT_FOUND").
    #[serde(default)]
    pub code: Option<String>,

    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,

    /// Endpoint payload.
    pub data: Option<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Checks the status discriminator, then decodes the envelope.
    ///
    /// # Errors
    /// `ClientError::Application` when the status is not `success`,
    /// `ClientError::Decode` when the envelope does not match `T`.
    pub fn from_value(raw: Value) -> ClientResult<Self> {
        check_status(&raw)?;
        Ok(serde_json::from_value(raw)?)
    }
}

impl ApiResponse<Value> {
    /// Converts a successful envelope into an acknowledgement.
    pub fn into_ack(self) -> Ack {
        Ack {
            message: self.message,
            data: self.data,
        }
    }
}

/// `data` of `/index/query`: entries sit one level below the envelope.
#[derive(Debug, Deserialize)]
pub struct IndexHits {
    pub count: u64,
    pub data: Option<Vec<Entry>>,
}

/// Flat body of `/index/query/sorted` and `/index/query/multi-sorted`.
#[derive(Debug, Deserialize)]
pub struct SortedHits {
    pub count: u64,
    pub total: u64,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub data: Option<Vec<Entry>>,
}

/// `data` of `/set/list`.
#[derive(Debug, Deserialize)]
pub struct SetNames {
    pub sets: Option<Vec<String>>,
}

/// Flat body of `/backup/list`.
#[derive(Debug, Deserialize)]
pub struct BackupList {
    pub backups: Option<Vec<BackupInfo>>,
}

/// Fails with `ClientError::Application` unless `status` is `success`.
///
/// Only the discriminator drives control flow; `code` and `message` are
/// copied into the error as-is.
pub fn check_status(raw: &Value) -> ClientResult<()> {
    match raw.get("status").and_then(Value::as_str) {
        Some(SUCCESS_STATUS) => Ok(()),
        _ => Err(ClientError::application(
            string_field(raw, "code"),
            string_field(raw, "message"),
        )),
    }
}

/// Checks the status, then decodes the whole body as `T`.
pub fn decode_flat<T: DeserializeOwned>(raw: Value) -> ClientResult<T> {
    check_status(&raw)?;
    Ok(serde_json::from_value(raw)?)
}

fn string_field(raw: &Value, name: &str) -> Option<String> {
    raw.get(name).and_then(Value::as_str).map(String::from)
}
