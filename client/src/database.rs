//! Database handle.

use serde_json::Value;

use common::errors::ClientResult;
use common::models::{
    Ack, BackupInfo, Credential, DatabaseRef, Pagination, QueryResult, SortOrder,
};

use crate::client::Client;
use crate::query::IndexQuery;
use crate::set::Set;

/// A named database plus the credential used for its per-database calls.
#[derive(Debug, Clone)]
pub struct Database {
    client: Client,
    reference: DatabaseRef,
}

impl Database {
    pub(crate) fn new(client: Client, reference: DatabaseRef) -> Self {
        Self { client, reference }
    }

    pub fn name(&self) -> &str {
        self.reference.name()
    }

    pub fn auth(&self) -> Option<&Credential> {
        self.reference.auth()
    }

    pub fn reference(&self) -> &DatabaseRef {
        &self.reference
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Creates a set and returns a handle to it.
    pub async fn create_set(&self, name: &str) -> ClientResult<Set> {
        self.client.create_set(&self.reference, name).await?;
        Ok(self.set(name))
    }

    /// Handle to an existing set. No request is made.
    pub fn set(&self, name: &str) -> Set {
        Set::new(self.clone(), self.reference.set(name))
    }

    pub async fn list_sets(&self) -> ClientResult<Vec<String>> {
        self.client.list_sets(&self.reference).await
    }

    pub async fn get(&self, set: &str, key: &str) -> ClientResult<Option<Value>> {
        self.set(set).get(key).await
    }

    pub async fn put(&self, set: &str, key: &str, value: &Value) -> ClientResult<Ack> {
        self.client.put(&self.reference.set(set), key, value).await
    }

    pub async fn delete(&self, set: &str, key: &str) -> ClientResult<Ack> {
        self.set(set).delete(key).await
    }

    pub async fn create_index(&self, set: &str, name: &str, field: &str) -> ClientResult<Ack> {
        self.set(set).create_index(name, field).await
    }

    pub async fn create_sortable_index(
        &self,
        set: &str,
        name: &str,
        primary_field: &str,
        sort_fields: &[String],
    ) -> ClientResult<Ack> {
        self.set(set)
            .create_sortable_index(name, primary_field, sort_fields)
            .await
    }

    pub async fn drop_index(&self, set: &str, name: &str) -> ClientResult<Ack> {
        self.set(set).drop_index(name).await
    }

    /// Runs a prepared query against `index` on `set`.
    pub async fn query(&self, set: &str, index: &str, query: &IndexQuery) -> ClientResult<QueryResult> {
        self.client.query(&self.reference.set(set), index, query).await
    }

    /// Equality-index lookup.
    pub async fn query_index(
        &self,
        set: &str,
        index: &str,
        value: &str,
        order: SortOrder,
    ) -> ClientResult<QueryResult> {
        self.set(set).query_index(index, value, order).await
    }

    /// Sortable-index lookup ordered by one field.
    pub async fn query_sorted(
        &self,
        set: &str,
        index: &str,
        value: &str,
        field: &str,
        order: SortOrder,
        pagination: Option<Pagination>,
    ) -> ClientResult<QueryResult> {
        self.set(set)
            .query_sorted(index, value, field, order, pagination)
            .await
    }

    /// Sortable-index lookup ordered by several fields, primary first.
    pub async fn query_multi_sorted<I, S>(
        &self,
        set: &str,
        index: &str,
        value: &str,
        fields: I,
        directions: Option<Vec<SortOrder>>,
        pagination: Option<Pagination>,
    ) -> ClientResult<QueryResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(set)
            .query_multi_sorted(index, value, fields, directions, pagination)
            .await
    }

    /// Backs up this database.
    pub async fn create_backup(&self) -> ClientResult<Ack> {
        self.client.create_backup(Some(self.name())).await
    }

    /// Backups of this database.
    pub async fn list_backups(&self) -> ClientResult<Vec<BackupInfo>> {
        self.client.list_backups(Some(self.name())).await
    }

    /// Drops this database, consuming the handle.
    pub async fn drop_database(self) -> ClientResult<Ack> {
        self.client.drop_database(self.name()).await
    }
}
