//! Response normalization.
//!
//! Maps each endpoint's raw body onto one stable result type. The index
//! query variants each have their own decoder: the equality endpoint nests
//! its entries under `data.data`, the sortable endpoints return them flat
//! alongside `total` and the window echo.

use serde_json::Value;
use tracing::debug;

use common::errors::ClientResult;
use common::models::{Ack, BackupInfo, Pagination, QueryResult, ServerInfo};
use common::response::{
    decode_flat, ApiResponse, BackupList, IndexHits, SetNames, SortedHits,
};

use crate::query::QueryVariant;

impl QueryVariant {
    /// Decodes a query response produced by this variant.
    ///
    /// `window` is the pagination window the call supplied; the offset/limit
    /// echo is reported only when it is present.
    pub fn decode(self, raw: Value, window: Option<Pagination>) -> ClientResult<QueryResult> {
        match self {
            QueryVariant::Equality => {
                let hits = ApiResponse::<IndexHits>::from_value(raw)?.data;
                Ok(hits
                    .map(|hits| QueryResult {
                        count: hits.count,
                        data: hits.data.unwrap_or_default(),
                        ..Default::default()
                    })
                    .unwrap_or_default())
            }
            QueryVariant::Sorted | QueryVariant::MultiSorted => {
                let hits: SortedHits = decode_flat(raw)?;
                let (offset, limit) = match window {
                    Some(w) => (
                        Some(hits.offset.unwrap_or(w.offset())),
                        Some(hits.limit.unwrap_or(w.limit())),
                    ),
                    None => (None, None),
                };
                Ok(QueryResult {
                    count: hits.count,
                    total: Some(hits.total),
                    offset,
                    limit,
                    data: hits.data.unwrap_or_default(),
                })
            }
        }
    }
}

/// Result of `/set/get`.
///
/// A missing key comes back as `None` whether the server reports it as a
/// success without `data`, as an application error, or as an HTTP error, as
/// long as it carries the `KEY_NOT_FOUND` code.
pub fn stored_value(exchange: ClientResult<Value>) -> ClientResult<Option<Value>> {
    match exchange.and_then(ApiResponse::<Value>::from_value) {
        Ok(resp) => Ok(resp.data.filter(|v| !v.is_null())),
        Err(e) if e.is_key_not_found() => {
            debug!(error = %e, "key not found");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Result of mutating calls.
pub fn ack(raw: Value) -> ClientResult<Ack> {
    Ok(ApiResponse::<Value>::from_value(raw)?.into_ack())
}

/// Result of `/set/list`.
pub fn set_names(raw: Value) -> ClientResult<Vec<String>> {
    Ok(ApiResponse::<SetNames>::from_value(raw)?
        .data
        .and_then(|d| d.sets)
        .unwrap_or_default())
}

/// Result of `/server/info`.
pub fn server_info(raw: Value) -> ClientResult<ServerInfo> {
    decode_flat(raw)
}

/// Result of `/backup/list`.
pub fn backups(raw: Value) -> ClientResult<Vec<BackupInfo>> {
    let list: BackupList = decode_flat(raw)?;
    Ok(list.backups.unwrap_or_default())
}
