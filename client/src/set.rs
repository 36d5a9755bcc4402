//! Set handle.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use common::errors::ClientResult;
use common::models::{Ack, Pagination, QueryResult, SetRef, SortOrder};

use crate::database::Database;
use crate::query::IndexQuery;

/// A named set inside a database.
#[derive(Debug, Clone)]
pub struct Set {
    database: Database,
    reference: SetRef,
}

impl Set {
    pub(crate) fn new(database: Database, reference: SetRef) -> Self {
        Self {
            database,
            reference,
        }
    }

    pub fn name(&self) -> &str {
        self.reference.name()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn reference(&self) -> &SetRef {
        &self.reference
    }

    /// Value stored under `key`, or `None` when the key does not exist.
    pub async fn get(&self, key: &str) -> ClientResult<Option<Value>> {
        self.database.client().get(&self.reference, key).await
    }

    /// Like [`Set::get`], decoding the value into `T`.
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> ClientResult<Option<T>> {
        match self.get(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Stores any serializable value under `key`.
    pub async fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> ClientResult<Ack> {
        let value = serde_json::to_value(value)?;
        self.database.client().put(&self.reference, key, &value).await
    }

    pub async fn delete(&self, key: &str) -> ClientResult<Ack> {
        self.database.client().delete(&self.reference, key).await
    }

    pub async fn create_index(&self, name: &str, field: &str) -> ClientResult<Ack> {
        self.database
            .client()
            .create_index(&self.reference, name, field)
            .await
    }

    pub async fn create_sortable_index(
        &self,
        name: &str,
        primary_field: &str,
        sort_fields: &[String],
    ) -> ClientResult<Ack> {
        self.database
            .client()
            .create_sortable_index(&self.reference, name, primary_field, sort_fields)
            .await
    }

    pub async fn drop_index(&self, name: &str) -> ClientResult<Ack> {
        self.database
            .client()
            .drop_index(&self.reference, name)
            .await
    }

    pub async fn query(&self, index: &str, query: &IndexQuery) -> ClientResult<QueryResult> {
        self.database
            .client()
            .query(&self.reference, index, query)
            .await
    }

    pub async fn query_index(
        &self,
        index: &str,
        value: &str,
        order: SortOrder,
    ) -> ClientResult<QueryResult> {
        self.query(index, &IndexQuery::equality(value, order)).await
    }

    pub async fn query_sorted(
        &self,
        index: &str,
        value: &str,
        field: &str,
        order: SortOrder,
        pagination: Option<Pagination>,
    ) -> ClientResult<QueryResult> {
        let query = windowed(IndexQuery::sorted(value, field, order), pagination);
        self.query(index, &query).await
    }

    /// # Errors
    /// `ClientError::SortArityMismatch` before any request is sent when
    /// `directions` and `fields` differ in length.
    pub async fn query_multi_sorted<I, S>(
        &self,
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
        let query = windowed(IndexQuery::multi_sorted(value, fields, directions)?, pagination);
        self.query(index, &query).await
    }
}

fn windowed(query: IndexQuery, pagination: Option<Pagination>) -> IndexQuery {
    match pagination {
        Some(p) => query.with_pagination(p),
        None => query,
    }
}
