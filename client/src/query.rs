//! Index query construction.
//!
//! An [`IndexQuery`] is the logical query: filter value, sort and optional
//! pagination window. [`IndexQuery::to_payload`] turns it into the wire body
//! of whichever endpoint its sort shape selects. Validation happens while the
//! query is built, so a malformed query never reaches the network.

use serde::Serialize;
use serde_json::Value;

use common::errors::ClientResult;
use common::models::request::IndexQueryRequest;
use common::models::{Endpoint, Pagination, SetRef, SortField, SortOrder, SortSpec};

/// The three index query endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryVariant {
    /// Equality index; one direction for the whole result.
    Equality,
    /// Sortable index, one sort field.
    Sorted,
    /// Sortable index, ordered list of sort fields.
    MultiSorted,
}

impl QueryVariant {
    pub const fn endpoint(self) -> Endpoint {
        match self {
            QueryVariant::Equality => Endpoint::QueryIndex,
            QueryVariant::Sorted => Endpoint::QuerySorted,
            QueryVariant::MultiSorted => Endpoint::QueryMultiSorted,
        }
    }
}

/// Sort part of a query; its shape picks the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySort {
    /// `"sort": "asc"`
    Direction(SortOrder),
    /// `"sort": {"field": .., "order": ..}`
    Field(SortField),
    /// `"sort": [{"field": .., "order": ..}, ...]`
    Fields(SortSpec),
}

/// A query against a secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexQuery {
    value: String,
    sort: QuerySort,
    pagination: Option<Pagination>,
}

impl IndexQuery {
    /// Equality-index lookup of `value`, ordered by `order`.
    pub fn equality(value: impl Into<String>, order: SortOrder) -> Self {
        Self {
            value: value.into(),
            sort: QuerySort::Direction(order),
            pagination: None,
        }
    }

    /// Sortable-index lookup of `value`, ordered by one field.
    pub fn sorted(value: impl Into<String>, field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            value: value.into(),
            sort: QuerySort::Field(SortField::new(field, order)),
            pagination: None,
        }
    }

    /// Sortable-index lookup of `value`, ordered by several fields, primary
    /// first. Omitted directions default to ascending.
    ///
    /// # Errors
    /// `ClientError::SortArityMismatch` when `directions` is supplied with a
    /// different length than `fields`.
    pub fn multi_sorted<I, S>(
        value: impl Into<String>,
        fields: I,
        directions: Option<Vec<SortOrder>>,
    ) -> ClientResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            value: value.into(),
            sort: QuerySort::Fields(SortSpec::new(fields, directions)?),
            pagination: None,
        })
    }

    /// Attaches a pagination window.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Attaches a pagination window, validating it first.
    ///
    /// # Errors
    /// `ClientError::Validation` when `limit` is zero.
    pub fn paginate(self, offset: u64, limit: u64) -> ClientResult<Self> {
        Ok(self.with_pagination(Pagination::new(offset, limit)?))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn sort(&self) -> &QuerySort {
        &self.sort
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    pub fn variant(&self) -> QueryVariant {
        match self.sort {
            QuerySort::Direction(_) => QueryVariant::Equality,
            QuerySort::Field(_) => QueryVariant::Sorted,
            QuerySort::Fields(_) => QueryVariant::MultiSorted,
        }
    }

    /// Wire body for querying `index` on `set`.
    pub fn to_payload(&self, set: &SetRef, index: &str) -> ClientResult<Value> {
        match &self.sort {
            QuerySort::Direction(order) => self.request(set, index, order),
            QuerySort::Field(field) => self.request(set, index, field),
            QuerySort::Fields(spec) => self.request(set, index, spec),
        }
    }

    fn request<S: Serialize>(&self, set: &SetRef, index: &str, sort: &S) -> ClientResult<Value> {
        let request = IndexQueryRequest {
            database: set.database().name(),
            set: set.name(),
            index,
            value: &self.value,
            sort,
            pagination: self.pagination,
            auth: set.database().auth(),
        };
        Ok(serde_json::to_value(request)?)
    }
}
