//! Server administration models: server info, backups, acknowledgements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Acknowledgement of a mutating call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    /// Server message, e.g. "Data stored successfully".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Extra payload, e.g. `{"index": "price_idx"}` after index creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// `/server/info` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub version: String,
    /// Human-readable uptime, e.g. "0d 2h 13m".
    pub uptime: String,
    pub databases_count: u64,
}

/// One entry of `/backup/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Backup object name; pass it to restore.
    pub name: String,
    pub timestamp: DateTime<Utc>,
    /// Size in bytes.
    pub size: i64,
    /// Source database, or "all" for full backups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl BackupInfo {
    /// True for backups covering every database.
    pub fn is_full(&self) -> bool {
        self.name.starts_with("backups/full/")
    }
}
