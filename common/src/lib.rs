//! Shared building blocks for the setbase client: wire models, response
//! envelopes, auth header resolution, errors and configuration.

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod response;
pub mod telemetry;

pub use config::ClientConfig;
pub use errors::{ClientError, ClientResult};
