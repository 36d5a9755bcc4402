//! Top-level setbase client.
//!
//! Owns the connection context (server address, optional administrative
//! credential) and the transport. Every operation is a single exchange:
//! build the typed payload, resolve auth headers, post, normalize.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use common::errors::ClientResult;
use common::middleware::AuthHeaders;
use common::models::request::{
    BackupScopeRequest, CreateDatabaseRequest, CreateIndexRequest, CreateSetRequest,
    CreateSortableIndexRequest, DropDatabaseRequest, DropIndexRequest, KeyRequest,
    ListSetsRequest, PutRequest, RestoreBackupRequest, ServerInfoRequest,
};
use common::models::{
    Ack, BackupInfo, Credential, DatabaseRef, Endpoint, QueryResult, ServerInfo, SetRef,
};
use common::ClientConfig;

use crate::database::Database;
use crate::normalize;
use crate::query::IndexQuery;
use crate::transport::{HttpTransport, Transport};

/// Client for one setbase server.
///
/// Immutable and cheap to clone; clones share the underlying HTTP
/// connection pool and can be used from many tasks at once.
///
/// # Examples
///
/// ```rust,no_run
/// use setbase::{Client, ClientConfig, Credential};
///
/// # async fn example() -> setbase::ClientResult<()> {
/// let client = Client::new(
///     ClientConfig::new("localhost", 8080).with_admin(Credential::new("admin", "secret")),
/// )?;
///
/// let db = client.create_database("shop", None).await?;
/// let products = db.create_set("products").await?;
/// products.put("elec_1", &serde_json::json!({"category": "Electronics", "price": 100})).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client talking HTTP to the configured server.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client from `SETBASE_*` environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Creates a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Returns a client using `admin` for administrative calls. The
    /// receiver is left unchanged.
    pub fn with_admin(&self, admin: Credential) -> Self {
        Self {
            config: Arc::new(self.config.as_ref().clone().with_admin(admin)),
            transport: Arc::clone(&self.transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn exchange<R: Serialize>(
        &self,
        endpoint: Endpoint,
        payload: &R,
        database_auth: Option<&Credential>,
    ) -> ClientResult<Value> {
        let body = serde_json::to_value(payload)?;
        self.send(endpoint, body, database_auth).await
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        body: Value,
        database_auth: Option<&Credential>,
    ) -> ClientResult<Value> {
        let headers = AuthHeaders::resolve(endpoint.auth(), self.config.admin.as_ref(), database_auth);
        debug!(
            endpoint = %endpoint,
            admin_auth = headers.admin().is_some(),
            database_auth = headers.database().is_some(),
            "sending request"
        );
        self.transport.post(endpoint.path(), &headers, body).await
    }

    // ---------------------------------------------------------------
    // Database lifecycle (administrative)
    // ---------------------------------------------------------------

    /// Creates a database, optionally protected by `auth`, and returns a
    /// handle bound to it.
    ///
    /// # Errors
    /// Fails with the server's error when the database cannot be created
    /// (e.g. it already exists).
    pub async fn create_database(
        &self,
        name: &str,
        auth: Option<Credential>,
    ) -> ClientResult<Database> {
        let payload = CreateDatabaseRequest {
            name,
            auth: auth.as_ref(),
        };
        let raw = self
            .exchange(Endpoint::CreateDatabase, &payload, auth.as_ref())
            .await?;
        normalize::ack(raw)?;
        info!(database = %name, "database created");
        Ok(self.database(name, auth))
    }

    /// Handle to an existing database. No request is made.
    pub fn database(&self, name: &str, auth: Option<Credential>) -> Database {
        let reference = match auth {
            Some(auth) => DatabaseRef::with_auth(name, auth),
            None => DatabaseRef::new(name),
        };
        Database::new(self.clone(), reference)
    }

    /// Drops a database.
    pub async fn drop_database(&self, name: &str) -> ClientResult<Ack> {
        let raw = self
            .exchange(Endpoint::DropDatabase, &DropDatabaseRequest { name }, None)
            .await?;
        let ack = normalize::ack(raw)?;
        info!(database = %name, "database dropped");
        Ok(ack)
    }

    // ---------------------------------------------------------------
    // Sets and data (per-database)
    // ---------------------------------------------------------------

    /// Creates a set in `db`.
    pub async fn create_set(&self, db: &DatabaseRef, name: &str) -> ClientResult<Ack> {
        let payload = CreateSetRequest {
            database: db.name(),
            name,
            auth: db.auth(),
        };
        let raw = self.exchange(Endpoint::CreateSet, &payload, db.auth()).await?;
        normalize::ack(raw)
    }

    /// Names of the sets in `db`.
    pub async fn list_sets(&self, db: &DatabaseRef) -> ClientResult<Vec<String>> {
        let payload = ListSetsRequest {
            database: db.name(),
            auth: db.auth(),
        };
        let raw = self.exchange(Endpoint::ListSets, &payload, db.auth()).await?;
        normalize::set_names(raw)
    }

    /// Value stored under `key`, or `None` when the key does not exist.
    pub async fn get(&self, set: &SetRef, key: &str) -> ClientResult<Option<Value>> {
        let db = set.database();
        let payload = KeyRequest {
            database: db.name(),
            set: set.name(),
            key,
            auth: db.auth(),
        };
        normalize::stored_value(self.exchange(Endpoint::Get, &payload, db.auth()).await)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn put(&self, set: &SetRef, key: &str, value: &Value) -> ClientResult<Ack> {
        let db = set.database();
        let payload = PutRequest {
            database: db.name(),
            set: set.name(),
            key,
            value,
            auth: db.auth(),
        };
        let raw = self.exchange(Endpoint::Put, &payload, db.auth()).await?;
        normalize::ack(raw)
    }

    /// Deletes `key`.
    pub async fn delete(&self, set: &SetRef, key: &str) -> ClientResult<Ack> {
        let db = set.database();
        let payload = KeyRequest {
            database: db.name(),
            set: set.name(),
            key,
            auth: db.auth(),
        };
        let raw = self.exchange(Endpoint::Delete, &payload, db.auth()).await?;
        normalize::ack(raw)
    }

    // ---------------------------------------------------------------
    // Indexes (per-database)
    // ---------------------------------------------------------------

    /// Creates an equality index on `field`.
    pub async fn create_index(&self, set: &SetRef, name: &str, field: &str) -> ClientResult<Ack> {
        let db = set.database();
        let payload = CreateIndexRequest {
            database: db.name(),
            set: set.name(),
            name,
            field,
            auth: db.auth(),
        };
        let raw = self.exchange(Endpoint::CreateIndex, &payload, db.auth()).await?;
        normalize::ack(raw)
    }

    /// Creates a sortable index filtering on `primary_field` and sortable by
    /// `sort_fields`.
    pub async fn create_sortable_index(
        &self,
        set: &SetRef,
        name: &str,
        primary_field: &str,
        sort_fields: &[String],
    ) -> ClientResult<Ack> {
        let db = set.database();
        let payload = CreateSortableIndexRequest {
            database: db.name(),
            set: set.name(),
            name,
            primary_field,
            sort_fields,
            auth: db.auth(),
        };
        let raw = self
            .exchange(Endpoint::CreateSortableIndex, &payload, db.auth())
            .await?;
        normalize::ack(raw)
    }

    /// Drops an index.
    pub async fn drop_index(&self, set: &SetRef, name: &str) -> ClientResult<Ack> {
        let db = set.database();
        let payload = DropIndexRequest {
            database: db.name(),
            set: set.name(),
            name,
            auth: db.auth(),
        };
        let raw = self.exchange(Endpoint::DropIndex, &payload, db.auth()).await?;
        normalize::ack(raw)
    }

    /// Runs `query` against `index`. The query's sort shape selects the
    /// endpoint and the decoder.
    pub async fn query(
        &self,
        set: &SetRef,
        index: &str,
        query: &IndexQuery,
    ) -> ClientResult<QueryResult> {
        let variant = query.variant();
        let body = query.to_payload(set, index)?;
        let raw = self
            .send(variant.endpoint(), body, set.database().auth())
            .await?;
        let result = variant.decode(raw, query.pagination())?;
        debug!(
            index = %index,
            count = result.count,
            total = ?result.total,
            "index query complete"
        );
        Ok(result)
    }

    // ---------------------------------------------------------------
    // Server and backups (administrative)
    // ---------------------------------------------------------------

    /// Server version, uptime and database count.
    pub async fn server_info(&self) -> ClientResult<ServerInfo> {
        let raw = self
            .exchange(Endpoint::ServerInfo, &ServerInfoRequest::default(), None)
            .await?;
        normalize::server_info(raw)
    }

    /// Backs up one database, or all of them when `database` is `None`.
    pub async fn create_backup(&self, database: Option<&str>) -> ClientResult<Ack> {
        let raw = self
            .exchange(Endpoint::CreateBackup, &BackupScopeRequest { database }, None)
            .await?;
        normalize::ack(raw)
    }

    /// Lists backups of one database, or all backups.
    pub async fn list_backups(&self, database: Option<&str>) -> ClientResult<Vec<BackupInfo>> {
        let raw = self
            .exchange(Endpoint::ListBackups, &BackupScopeRequest { database }, None)
            .await?;
        normalize::backups(raw)
    }

    /// Restores from the named backup.
    pub async fn restore_backup(&self, backup_name: &str) -> ClientResult<Ack> {
        let raw = self
            .exchange(
                Endpoint::RestoreBackup,
                &RestoreBackupRequest { backup_name },
                None,
            )
            .await?;
        let ack = normalize::ack(raw)?;
        info!(backup = %backup_name, "backup restored");
        Ok(ack)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("config", &self.config).finish()
    }
}
