//! Server endpoint table.

use crate::middleware::AuthRequirement;

/// Every endpoint the client calls. All are `POST` with a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CreateDatabase,
    DropDatabase,
    CreateSet,
    ListSets,
    Get,
    Put,
    Delete,
    CreateIndex,
    CreateSortableIndex,
    DropIndex,
    QueryIndex,
    QuerySorted,
    QueryMultiSorted,
    ServerInfo,
    CreateBackup,
    ListBackups,
    RestoreBackup,
}

impl Endpoint {
    pub const ALL: [Endpoint; 17] = [
        Endpoint::CreateDatabase,
        Endpoint::DropDatabase,
        Endpoint::CreateSet,
        Endpoint::ListSets,
        Endpoint::Get,
        Endpoint::Put,
        Endpoint::Delete,
        Endpoint::CreateIndex,
        Endpoint::CreateSortableIndex,
        Endpoint::DropIndex,
        Endpoint::QueryIndex,
        Endpoint::QuerySorted,
        Endpoint::QueryMultiSorted,
        Endpoint::ServerInfo,
        Endpoint::CreateBackup,
        Endpoint::ListBackups,
        Endpoint::RestoreBackup,
    ];

    /// URL path relative to the server root.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::CreateDatabase => "/create",
            Endpoint::DropDatabase => "/drop",
            Endpoint::CreateSet => "/set/create",
            Endpoint::ListSets => "/set/list",
            Endpoint::Get => "/set/get",
            Endpoint::Put => "/set/put",
            Endpoint::Delete => "/set/delete",
            Endpoint::CreateIndex => "/index/create",
            Endpoint::CreateSortableIndex => "/index/create/sortable",
            Endpoint::DropIndex => "/index/drop",
            Endpoint::QueryIndex => "/index/query",
            Endpoint::QuerySorted => "/index/query/sorted",
            Endpoint::QueryMultiSorted => "/index/query/multi-sorted",
            Endpoint::ServerInfo => "/server/info",
            Endpoint::CreateBackup => "/backup/create",
            Endpoint::ListBackups => "/backup/list",
            Endpoint::RestoreBackup => "/backup/restore",
        }
    }

    /// Credentials the endpoint expects.
    pub const fn auth(self) -> AuthRequirement {
        match self {
            Endpoint::CreateDatabase
            | Endpoint::DropDatabase
            | Endpoint::ServerInfo
            | Endpoint::CreateBackup
            | Endpoint::ListBackups
            | Endpoint::RestoreBackup => AuthRequirement::Administrative,
            _ => AuthRequirement::Database,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
