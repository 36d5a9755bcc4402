//! Database and set references.
//!
//! References are named-scope tokens re-sent on every call; they hold no
//! server-side handle.

use super::Credential;

/// A database name plus the optional per-database credential used with it.
///
/// Several references to the same database may coexist with different
/// credentials (an admin view and a tenant view, say).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseRef {
    name: String,
    auth: Option<Credential>,
}

impl DatabaseRef {
    /// Creates a reference without per-database credentials.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auth: None,
        }
    }

    /// Creates a reference carrying per-database credentials.
    pub fn with_auth(name: impl Into<String>, auth: Credential) -> Self {
        Self {
            name: name.into(),
            auth: Some(auth),
        }
    }

    /// Database name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-database credential, if any.
    pub fn auth(&self) -> Option<&Credential> {
        self.auth.as_ref()
    }

    /// Reference to a set inside this database.
    pub fn set(&self, name: impl Into<String>) -> SetRef {
        SetRef {
            database: self.clone(),
            name: name.into(),
        }
    }
}

/// A (database reference, set name) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRef {
    database: DatabaseRef,
    name: String,
}

impl SetRef {
    /// Owning database reference.
    pub fn database(&self) -> &DatabaseRef {
        &self.database
    }

    /// Set name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
