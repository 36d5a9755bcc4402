//! In-process setbase server for integration tests.
//!
//! Speaks the same JSON-over-POST protocol as the real server: the
//! `{status, code, message}` error envelope, admin auth on administrative
//! endpoints when configured, per-database auth from the `Authorization`
//! header or the body `auth`, equality and sortable indexes with a default
//! page size of 10. Every request is recorded for header assertions.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use setbase::{Client, ClientConfig, Credential};

const DEFAULT_PAGE_SIZE: usize = 10;

type Reply = (StatusCode, Json<Value>);

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub admin_header: Option<String>,
    pub auth_header: Option<String>,
    pub request_id: Option<String>,
    pub body: Value,
}

#[derive(Debug, Clone)]
enum IndexDef {
    Equality { field: String },
    Sortable { primary: String, sort_fields: Vec<String> },
}

#[derive(Debug, Default)]
struct FakeDatabase {
    auth: Option<Credential>,
    sets: BTreeMap<String, BTreeMap<String, Value>>,
    indexes: HashMap<(String, String), IndexDef>,
}

#[derive(Debug, Default)]
struct FakeState {
    admin: Option<Credential>,
    databases: BTreeMap<String, FakeDatabase>,
    backups: Vec<Value>,
    requests: Vec<RecordedRequest>,
}

pub struct FakeServer {
    addr: SocketAddr,
    state: Arc<Mutex<FakeState>>,
}

impl FakeServer {
    /// Starts a server without admin auth.
    pub async fn start() -> Self {
        Self::start_with_admin(None).await
    }

    /// Starts a server that requires `admin` on administrative endpoints.
    pub async fn start_with_admin(admin: Option<Credential>) -> Self {
        setbase::init_tracing();

        let state = Arc::new(Mutex::new(FakeState {
            admin,
            ..Default::default()
        }));
        let app = Router::new().fallback(dispatch).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fake server");
        let addr = listener.local_addr().expect("fake server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake server stopped");
        });

        Self { addr, state }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.addr.ip().to_string(), self.addr.port())
    }

    pub fn client(&self) -> Client {
        Client::new(self.config()).expect("client")
    }

    pub fn admin_client(&self, admin: Credential) -> Client {
        Client::new(self.config().with_admin(admin)).expect("client")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request recorded")
    }

    /// Writes directly into the store, bypassing the protocol.
    pub fn seed(&self, database: &str, set: &str, key: &str, value: Value) {
        let mut state = self.state.lock().unwrap();
        state
            .databases
            .entry(database.to_string())
            .or_default()
            .sets
            .entry(set.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }
}

async fn dispatch(
    State(state): State<Arc<Mutex<FakeState>>>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        path: uri.path().to_string(),
        admin_header: header("x-admin-authorization"),
        auth_header: header("authorization"),
        request_id: header("x-request-id"),
        body: body.clone(),
    });

    let admin_header = header("x-admin-authorization");
    let auth_header = header("authorization");
    match uri.path() {
        "/create" | "/drop" | "/server/info" | "/backup/create" | "/backup/list"
        | "/backup/restore" => {
            if let Some(admin) = &state.admin {
                if admin_header.as_deref() != Some(admin.basic_auth_value().as_str()) {
                    return error(
                        StatusCode::UNAUTHORIZED,
                        "ADMIN_AUTH_REQUIRED",
                        "Admin authentication required",
                    );
                }
            }
            administrative(&mut state, uri.path(), &body)
        }
        path => {
            let Some(db_name) = body["database"].as_str() else {
                return error(StatusCode::BAD_REQUEST, "INVALID_REQUEST", "Database name required");
            };
            let Some(db) = state.databases.get_mut(db_name) else {
                return error(StatusCode::NOT_FOUND, "DB_NOT_FOUND", "Database not found");
            };
            if let Some(expected) = &db.auth {
                let supplied = auth_header
                    .as_deref()
                    .and_then(Credential::from_basic_auth_value)
                    .or_else(|| serde_json::from_value(body["auth"].clone()).ok());
                if supplied.as_ref() != Some(expected) {
                    return error(StatusCode::UNAUTHORIZED, "AUTH_FAILED", "Authentication failed");
                }
            }
            per_database(db, path, &body)
        }
    }
}

fn administrative(state: &mut FakeState, path: &str, body: &Value) -> Reply {
    match path {
        "/create" => {
            let name = body["name"].as_str().unwrap_or_default().to_string();
            if state.databases.contains_key(&name) {
                return error(StatusCode::CONFLICT, "DB_ALREADY_EXISTS", "Database already exists");
            }
            let auth = serde_json::from_value(body["auth"].clone()).ok();
            state.databases.insert(
                name,
                FakeDatabase {
                    auth,
                    ..Default::default()
                },
            );
            ok(json!({"status": "success", "message": "Database created successfully"}))
        }
        "/drop" => {
            let name = body["name"].as_str().unwrap_or_default();
            match state.databases.remove(name) {
                Some(_) => ok(json!({"status": "success", "message": "Database dropped successfully"})),
                None => error(StatusCode::NOT_FOUND, "DB_NOT_FOUND", "Database not found"),
            }
        }
        "/server/info" => ok(json!({
            "status": "success",
            "version": "0.0.1",
            "uptime": "0d 0h 0m 1s",
            "databases_count": state.databases.len()
        })),
        "/backup/create" => {
            let names: Vec<String> = match body["database"].as_str() {
                Some(name) => vec![name.to_string()],
                None => state.databases.keys().cloned().collect(),
            };
            let stamp = Utc::now();
            for name in names {
                state.backups.push(json!({
                    "name": format!("backups/{}/{}.json", name, stamp.format("%Y%m%d-%H%M%S")),
                    "timestamp": stamp.to_rfc3339(),
                    "size": 128,
                    "database": name
                }));
            }
            ok(json!({"status": "success", "message": "Backup created successfully"}))
        }
        "/backup/list" => {
            let backups: Vec<&Value> = state
                .backups
                .iter()
                .filter(|b| match body["database"].as_str() {
                    Some(name) => b["database"] == name,
                    None => true,
                })
                .collect();
            ok(json!({"status": "success", "backups": backups}))
        }
        "/backup/restore" => {
            let name = body["backup_name"].as_str().unwrap_or_default();
            if state.backups.iter().any(|b| b["name"] == name) {
                ok(json!({"status": "success", "message": "Backup restored successfully"}))
            } else {
                error(StatusCode::NOT_FOUND, "BACKUP_NOT_FOUND", "Backup not found")
            }
        }
        _ => error(StatusCode::NOT_FOUND, "NOT_FOUND", "Unknown endpoint"),
    }
}

fn per_database(db: &mut FakeDatabase, path: &str, body: &Value) -> Reply {
    let set_name = body["set"].as_str().unwrap_or_default().to_string();

    match path {
        "/set/create" => {
            let name = body["name"].as_str().unwrap_or_default();
            db.sets.entry(name.to_string()).or_default();
            return ok(json!({"status": "success", "message": "Set created successfully"}));
        }
        "/set/list" => {
            let sets: Vec<&String> = db.sets.keys().collect();
            return ok(json!({"status": "success", "data": {"sets": sets}}));
        }
        _ => {}
    }

    let Some(set) = db.sets.get_mut(&set_name) else {
        return error(StatusCode::NOT_FOUND, "SET_NOT_FOUND", "Set not found");
    };
    let key = body["key"].as_str().unwrap_or_default();

    match path {
        "/set/get" => match set.get(key) {
            Some(value) => ok(json!({"status": "success", "data": value})),
            None => error(StatusCode::NOT_FOUND, "KEY_NOT_FOUND", "Key not found"),
        },
        "/set/put" => {
            set.insert(key.to_string(), body["value"].clone());
            ok(json!({"status": "success", "message": "Value stored successfully"}))
        }
        "/set/delete" => match set.remove(key) {
            Some(_) => ok(json!({"status": "success", "message": "Key deleted successfully"})),
            None => error(StatusCode::NOT_FOUND, "KEY_NOT_FOUND", "Key not found"),
        },
        "/index/create" => {
            let name = body["name"].as_str().unwrap_or_default().to_string();
            let field = body["field"].as_str().unwrap_or_default().to_string();
            db.indexes
                .insert((set_name, name.clone()), IndexDef::Equality { field });
            ok(json!({
                "status": "success",
                "message": "Index created successfully",
                "data": {"index": name}
            }))
        }
        "/index/create/sortable" => {
            let name = body["name"].as_str().unwrap_or_default().to_string();
            let primary = body["primary_field"].as_str().unwrap_or_default().to_string();
            let sort_fields = serde_json::from_value(body["sort_fields"].clone()).unwrap_or_default();
            db.indexes.insert(
                (set_name, name.clone()),
                IndexDef::Sortable {
                    primary,
                    sort_fields,
                },
            );
            ok(json!({
                "status": "success",
                "message": "Sortable index created successfully",
                "data": {"index": name}
            }))
        }
        "/index/drop" => {
            let name = body["name"].as_str().unwrap_or_default().to_string();
            match db.indexes.remove(&(set_name, name)) {
                Some(_) => ok(json!({"status": "success", "message": "Index dropped successfully"})),
                None => error(StatusCode::NOT_FOUND, "INDEX_NOT_FOUND", "Index not found"),
            }
        }
        "/index/query" | "/index/query/sorted" | "/index/query/multi-sorted" => {
            let index = body["index"].as_str().unwrap_or_default().to_string();
            let Some(def) = db.indexes.get(&(set_name.clone(), index)).cloned() else {
                return error(StatusCode::NOT_FOUND, "INDEX_NOT_FOUND", "Index not found");
            };
            let set = &db.sets[&set_name];
            query(set, &def, path, body)
        }
        _ => error(StatusCode::NOT_FOUND, "NOT_FOUND", "Unknown endpoint"),
    }
}

fn query(set: &BTreeMap<String, Value>, def: &IndexDef, path: &str, body: &Value) -> Reply {
    let wanted = body["value"].as_str().unwrap_or_default();
    let filter_field = match def {
        IndexDef::Equality { field } => field,
        IndexDef::Sortable { primary, .. } => primary,
    };
    let mut hits: Vec<(&String, &Value)> = set
        .iter()
        .filter(|(_, v)| field_text(&v[filter_field.as_str()]).as_deref() == Some(wanted))
        .collect();

    if path == "/index/query" {
        if body["sort"] == "desc" {
            hits.reverse();
        }
        let data: Vec<Value> = hits.iter().map(|(k, v)| json!({"key": k, "value": v})).collect();
        return ok(json!({"status": "success", "data": {"count": data.len(), "data": data}}));
    }

    let sort: Vec<(String, bool)> = match &body["sort"] {
        Value::Array(fields) => fields.iter().map(sort_key).collect(),
        single => vec![sort_key(single)],
    };
    if let IndexDef::Sortable { sort_fields, .. } = def {
        if let Some((field, _)) = sort.iter().find(|(f, _)| !sort_fields.contains(f)) {
            return error(
                StatusCode::BAD_REQUEST,
                "INVALID_SORT_FIELD",
                &format!("Field {} is not a sort field of this index", field),
            );
        }
    }

    hits.sort_by(|(_, a), (_, b)| {
        for (field, ascending) in &sort {
            let ord = compare_missing_last(&a[field.as_str()], &b[field.as_str()], *ascending);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });

    let offset = body["pagination"]["offset"].as_u64().unwrap_or(0) as usize;
    let limit = body["pagination"]["limit"]
        .as_u64()
        .filter(|l| *l > 0)
        .map(|l| l as usize)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let total = hits.len();
    let data: Vec<Value> = hits
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|(k, v)| json!({"key": k, "value": v}))
        .collect();

    ok(json!({
        "status": "success",
        "count": data.len(),
        "total": total,
        "offset": offset,
        "limit": limit,
        "data": data
    }))
}

fn sort_key(entry: &Value) -> (String, bool) {
    (
        entry["field"].as_str().unwrap_or_default().to_string(),
        entry["order"] != "desc",
    )
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn compare_missing_last(a: &Value, b: &Value, ascending: bool) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => field_text(a).cmp(&field_text(b)),
            };
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        }
    }
}

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn error(status: StatusCode, code: &str, message: &str) -> Reply {
    (
        status,
        Json(json!({"status": "error", "code": code, "message": message})),
    )
}
