//! Wire request payloads, one struct per endpoint.
//!
//! `auth` is skipped when absent so payloads never carry `"auth": null`.

use serde::Serialize;
use serde_json::Value;

use super::{Credential, Pagination};

/// `/create`
#[derive(Debug, Serialize)]
pub struct CreateDatabaseRequest<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a Credential>,
}

/// `/drop`
#[derive(Debug, Serialize)]
pub struct DropDatabaseRequest<'a> {
    pub name: &'a str,
}

/// `/set/create`
#[derive(Debug, Serialize)]
pub struct CreateSetRequest<'a> {
    pub database: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a Credential>,
}

/// `/set/list`
#[derive(Debug, Serialize)]
pub struct ListSetsRequest<'a> {
    pub database: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a Credential>,
}

/// `/set/get` and `/set/delete`
#[derive(Debug, Serialize)]
pub struct KeyRequest<'a> {
    pub database: &'a str,
    pub set: &'a str,
    pub key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a Credential>,
}

/// `/set/put`
#[derive(Debug, Serialize)]
pub struct PutRequest<'a> {
    pub database: &'a str,
    pub set: &'a str,
    pub key: &'a str,
    pub value: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a Credential>,
}

/// `/index/create`
#[derive(Debug, Serialize)]
pub struct CreateIndexRequest<'a> {
    pub database: &'a str,
    pub set: &'a str,
    pub name: &'a str,
    pub field: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a Credential>,
}

/// `/index/create/sortable`
#[derive(Debug, Serialize)]
pub struct CreateSortableIndexRequest<'a> {
    pub database: &'a str,
    pub set: &'a str,
    pub name: &'a str,
    pub primary_field: &'a str,
    pub sort_fields: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a Credential>,
}

/// `/index/drop`
#[derive(Debug, Serialize)]
pub struct DropIndexRequest<'a> {
    pub database: &'a str,
    pub set: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a Credential>,
}

/// `/index/query`, `/index/query/sorted` and `/index/query/multi-sorted`.
///
/// `S` is the sort shape of the variant: a bare direction token, one
/// `{field, order}` object, or an array of them.
#[derive(Debug, Serialize)]
pub struct IndexQueryRequest<'a, S: Serialize> {
    pub database: &'a str,
    pub set: &'a str,
    pub index: &'a str,
    pub value: &'a str,
    pub sort: &'a S,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a Credential>,
}

/// `/server/info`
#[derive(Debug, Default, Serialize)]
pub struct ServerInfoRequest {}

/// `/backup/create` and `/backup/list`; no database means all databases.
#[derive(Debug, Default, Serialize)]
pub struct BackupScopeRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'a str>,
}

/// `/backup/restore`
#[derive(Debug, Serialize)]
pub struct RestoreBackupRequest<'a> {
    pub backup_name: &'a str,
}
