//! Authentication header resolution.
//!
//! Administrative and per-database credentials travel in separate headers so
//! a single request can legitimately carry both.

use reqwest::header::{HeaderName, AUTHORIZATION};

use crate::models::Credential;

/// Header carrying the administrative credential.
pub static ADMIN_AUTHORIZATION_HEADER: HeaderName =
    HeaderName::from_static("x-admin-authorization");

/// What credentials an endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// No administrative credential; a database credential still travels.
    None,
    /// Server and database lifecycle operations.
    Administrative,
    /// Data operations on one database.
    Database,
}

/// Rendered auth headers for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthHeaders {
    admin: Option<String>,
    database: Option<String>,
}

impl AuthHeaders {
    /// Resolves the headers for one call.
    ///
    /// The administrative header is emitted only when the endpoint requires
    /// administrative auth and a credential is configured; a missing one is
    /// left for the server to reject. The `Authorization` header is emitted
    /// whenever a per-database credential comes with the call, regardless of
    /// the administrative header.
    pub fn resolve(
        requirement: AuthRequirement,
        admin: Option<&Credential>,
        database: Option<&Credential>,
    ) -> Self {
        match requirement {
            AuthRequirement::Administrative => Self {
                admin: admin.map(Credential::basic_auth_value),
                database: database.map(Credential::basic_auth_value),
            },
            AuthRequirement::None | AuthRequirement::Database => Self {
                admin: None,
                database: database.map(Credential::basic_auth_value),
            },
        }
    }

    /// `X-Admin-Authorization` value, if any.
    pub fn admin(&self) -> Option<&str> {
        self.admin.as_deref()
    }

    /// `Authorization` value, if any.
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.admin.is_none() && self.database.is_none()
    }

    /// Header name/value pairs to attach.
    pub fn iter(&self) -> impl Iterator<Item = (HeaderName, &str)> {
        let admin = self
            .admin
            .as_deref()
            .map(|v| (ADMIN_AUTHORIZATION_HEADER.clone(), v));
        let database = self.database.as_deref().map(|v| (AUTHORIZATION, v));
        admin.into_iter().chain(database)
    }
}
