//! Index query result models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored entry returned by an index query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

/// Normalized result of any of the three index queries.
///
/// `total`, `offset` and `limit` are `None` where they do not apply: the
/// equality query never reports them, and the window echo is only present
/// when the call supplied a pagination window. `None` means "not
/// applicable", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Number of entries in `data`.
    pub count: u64,

    /// Number of entries matching the filter, ignoring pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Matching entries in server order.
    pub data: Vec<Entry>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Keys in result order.
    pub fn keys(&self) -> Vec<&str> {
        self.data.iter().map(|e| e.key.as_str()).collect()
    }

    /// Value of `field` in each entry, in result order. Entries without the
    /// field yield `Value::Null`.
    pub fn field_values(&self, field: &str) -> Vec<&Value> {
        self.data
            .iter()
            .map(|e| e.value.get(field).unwrap_or(&Value::Null))
            .collect()
    }
}
