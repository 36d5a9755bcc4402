//! Sort specification and pagination window models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{ClientError, ClientResult};

/// Sort direction. Serialized as `"asc"` / `"desc"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Maps an `ascending` flag to a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Asc
    }

    /// Wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(field, order)` entry of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    pub order: SortOrder,
}

impl SortField {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

/// Ordered sort specification; the first entry is the primary key.
///
/// Serializes as a JSON array of `{field, order}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortSpec(Vec<SortField>);

impl SortSpec {
    /// Pairs sort fields with their directions.
    ///
    /// Without a direction list every field sorts ascending. With one, its
    /// length must match the field list. Field order is kept as given and is
    /// never deduplicated or checked against a schema.
    ///
    /// # Errors
    /// Returns `ClientError::SortArityMismatch` when the lengths differ.
    pub fn new<I, S>(fields: I, directions: Option<Vec<SortOrder>>) -> ClientResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let directions = match directions {
            Some(directions) if directions.len() != fields.len() => {
                return Err(ClientError::SortArityMismatch {
                    expected: fields.len(),
                    actual: directions.len(),
                });
            }
            Some(directions) => directions,
            None => vec![SortOrder::Asc; fields.len()],
        };

        Ok(Self(
            fields
                .into_iter()
                .zip(directions)
                .map(|(field, order)| SortField { field, order })
                .collect(),
        ))
    }

    /// Same as [`SortSpec::new`] with `ascending` flags instead of directions.
    pub fn from_flags<I, S>(fields: I, ascending: Option<&[bool]>) -> ClientResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let directions =
            ascending.map(|flags| flags.iter().copied().map(SortOrder::from_ascending).collect());
        Self::new(fields, directions)
    }

    pub fn fields(&self) -> &[SortField] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result page bounds: skip `offset` entries, return at most `limit`.
///
/// Only [`Pagination::new`] builds one, so every window in circulation has
/// `limit >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Validate)]
pub struct Pagination {
    offset: u64,
    #[validate(range(min = 1, message = "Pagination limit must be greater than zero"))]
    limit: u64,
}

impl Pagination {
    /// Creates a validated pagination window.
    ///
    /// # Errors
    /// Returns `ClientError::Validation` when `limit` is zero.
    pub fn new(offset: u64, limit: u64) -> ClientResult<Self> {
        let window = Self { offset, limit };
        window.validate()?;
        Ok(window)
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}
