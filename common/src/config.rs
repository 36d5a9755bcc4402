//! Client configuration.
//!
//! Host, port, optional administrative credential and request timeout.
//! Built in code or loaded from `SETBASE_*` environment variables.

use std::time::Duration;

use crate::errors::{ClientError, ClientResult};
use crate::models::Credential;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    /// Administrative credential for server and database lifecycle calls.
    pub admin: Option<Credential>,
    /// Per-request timeout applied at the transport.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            admin: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Creates a config for `host:port` without admin credentials.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Sets the administrative credential.
    pub fn with_admin(mut self, admin: Credential) -> Self {
        self.admin = Some(admin);
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `http://host:port`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Loads the config from the environment.
    ///
    /// Reads `SETBASE_HOST`, `SETBASE_PORT`, `SETBASE_TIMEOUT_SECS`,
    /// `SETBASE_ADMIN_USERNAME` and `SETBASE_ADMIN_PASSWORD`. Unset variables
    /// keep their defaults; the admin credential is set only when both parts
    /// are present.
    ///
    /// # Errors
    /// Returns `ClientError::Config` for unparsable numbers.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup("SETBASE_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("SETBASE_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ClientError::Config(format!("invalid SETBASE_PORT: {}", port)))?;
        }
        if let Some(secs) = lookup("SETBASE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ClientError::Config(format!("invalid SETBASE_TIMEOUT_SECS: {}", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let (Some(username), Some(password)) = (
            lookup("SETBASE_ADMIN_USERNAME"),
            lookup("SETBASE_ADMIN_PASSWORD"),
        ) {
            config.admin = Some(Credential::new(username, password));
        }

        Ok(config)
    }
}
