//! Shared data models for the setbase client.

pub mod credential;
pub mod database;
pub mod endpoint;
pub mod query;
pub mod request;
pub mod server;
pub mod sort;

// Re-export commonly used types
pub use credential::Credential;
pub use database::{DatabaseRef, SetRef};
pub use endpoint::Endpoint;
pub use query::{Entry, QueryResult};
pub use server::{Ack, BackupInfo, ServerInfo};
pub use sort::{Pagination, SortField, SortOrder, SortSpec};
