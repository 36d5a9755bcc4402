//! # setbase
//!
//! Client for a remote key-value store organized as databases of sets, with
//! equality and sortable secondary indexes.
//!
//! ```text
//! Client ──▶ Database ──▶ Set ──▶ get / put / delete / query
//!   │                               │
//!   └── admin credential            └── per-database credential
//! ```
//!
//! Every operation is one JSON `POST`. Administrative endpoints carry the
//! client's admin credential in `X-Admin-Authorization`; per-database
//! endpoints carry the database credential in `Authorization`.

mod client;
mod database;
mod normalize;
mod query;
mod set;
mod transport;

pub use client::Client;
pub use database::Database;
pub use query::{IndexQuery, QuerySort, QueryVariant};
pub use set::Set;
pub use transport::{HttpTransport, Transport};

pub use common::middleware::AuthHeaders;
pub use common::models::{
    Ack, BackupInfo, Credential, DatabaseRef, Endpoint, Entry, Pagination, QueryResult,
    ServerInfo, SetRef, SortField, SortOrder, SortSpec,
};
pub use common::telemetry::init_tracing;
pub use common::{ClientConfig, ClientError, ClientResult};
