//! In-process mock of the file-storage backend, implementing just enough of
//! the REST contract for the client test suites.

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tempfile::TempDir;
use url::Url;

use depot_client::{ApiClient, AppState};

pub const TEST_EMAIL: &str = "user@example.com";
pub const TEST_PASSWORD: &str = "User123!";
pub const TEST_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
struct StoredFile {
    id: String,
    filename: String,
    content_type: String,
    folder: String,
    created_at: String,
    data: Vec<u8>,
}

impl StoredFile {
    fn item_json(&self) -> Value {
        json!({
            "id": self.id,
            "filename": self.filename,
            "size": self.data.len(),
            "type": self.content_type,
            "folder": self.folder,
            "created_at": self.created_at,
        })
    }
}

#[derive(Debug, Clone)]
struct StoredUser {
    id: String,
    email: String,
    role: String,
    is_active: bool,
}

impl StoredUser {
    /// Mirrors the backend's hand-built dicts: optional fields are present
    /// as explicit nulls, never omitted.
    fn with_stats_json(&self, files: &[StoredFile]) -> Value {
        let total_size: u64 = files.iter().map(|f| f.data.len() as u64).sum();
        json!({
            "id": self.id,
            "email": self.email,
            "username": null,
            "role": self.role,
            "created_at": "2025-01-01T00:00:00",
            "last_login": null,
            "is_active": self.is_active,
            "is_verified": true,
            "stats": {
                "file_count": files.len(),
                "total_size": total_size,
                "total_size_mb": 0.0,
            },
        })
    }
}

#[derive(Debug, Default)]
struct Inner {
    files: Vec<StoredFile>,
    users: Vec<StoredUser>,
    next_id: u32,
    /// Respond to listings with the `{files, total}` envelope shape.
    envelope: bool,
    /// Reject every request with 401.
    reject_all: bool,
    /// Fail deletes with a 500.
    fail_delete: bool,
}

/// Handle to the mock backend's behavior and stored state.
#[derive(Debug, Clone, Default)]
pub struct Backend {
    inner: Arc<Mutex<Inner>>,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_file(&self, id: &str, filename: &str, folder: &str, data: &[u8]) {
        self.seed_typed_file(id, filename, folder, "application/octet-stream", data);
    }

    pub fn seed_typed_file(
        &self,
        id: &str,
        filename: &str,
        folder: &str,
        content_type: &str,
        data: &[u8],
    ) {
        let mut inner = self.inner.lock().unwrap();
        inner.files.push(StoredFile {
            id: id.to_string(),
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            folder: folder.to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            data: data.to_vec(),
        });
    }

    pub fn seed_user(&self, id: &str, email: &str, role: &str, is_active: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner.users.push(StoredUser {
            id: id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            is_active,
        });
    }

    pub fn set_envelope(&self, on: bool) {
        self.inner.lock().unwrap().envelope = on;
    }

    pub fn set_reject_all(&self, on: bool) {
        self.inner.lock().unwrap().reject_all = on;
    }

    pub fn set_fail_delete(&self, on: bool) {
        self.inner.lock().unwrap().fail_delete = on;
    }

    /// Bind on an ephemeral port and serve in a background task.
    pub async fn spawn(&self) -> Url {
        let app = router(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{addr}/api/v1")).unwrap()
    }
}

/// Spawn a backend and build an [`ApiClient`] with isolated persisted state.
/// The returned [`TempDir`] owns that state for the test's lifetime.
pub async fn client_against(backend: &Backend) -> (ApiClient, TempDir) {
    let base_url = backend.spawn().await;
    let dir = TempDir::new().unwrap();
    let state = AppState::open(Some(dir.path().to_path_buf())).unwrap();
    let client = ApiClient::new(&base_url, state).unwrap();
    (client, dir)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Not authenticated"})),
    )
        .into_response()
}

fn check_auth(state: &Backend, headers: &HeaderMap) -> Result<(), Response> {
    if state.inner.lock().unwrap().reject_all {
        return Err(unauthorized());
    }
    let expected = format!("Bearer {TEST_TOKEN}");
    match headers.get(header::AUTHORIZATION) {
        Some(v) if v.to_str().ok() == Some(expected.as_str()) => Ok(()),
        _ => Err(unauthorized()),
    }
}

fn router(state: Backend) -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/files/", get(list_files))
        .route("/api/v1/files/upload", post(upload_file))
        .route(
            "/api/v1/files/:id",
            delete(delete_file).patch(rename_file),
        )
        .route("/api/v1/files/:id/download", get(download_file))
        .route("/api/v1/files/:id/metadata", get(file_metadata))
        .route("/api/v1/admin/dashboard", get(dashboard))
        .route("/api/v1/admin/users", get(admin_list_users))
        .route(
            "/api/v1/admin/users/:id",
            get(admin_user_details).delete(admin_delete_user),
        )
        .route(
            "/api/v1/admin/users/:id/toggle-status",
            patch(admin_toggle_status),
        )
        .route("/api/v1/admin/users/:id/role", patch(admin_change_role))
        .route("/api/v1/admin/files", get(admin_list_files))
        .route("/api/v1/admin/files/:id", delete(admin_delete_file))
        .route("/api/v1/admin/top-users", get(top_users))
        .with_state(state)
}

#[derive(Deserialize)]
struct Credentials {
    email: String,
    password: String,
}

async fn login(State(state): State<Backend>, Json(creds): Json<Credentials>) -> Response {
    if state.inner.lock().unwrap().reject_all {
        return unauthorized();
    }
    if creds.email == TEST_EMAIL && creds.password == TEST_PASSWORD {
        Json(json!({
            "access_token": TEST_TOKEN,
            "refresh_token": "refresh-token",
            "token_type": "bearer",
            "expires_in": 1800,
            "user": {"id": "u1", "email": TEST_EMAIL, "role": "user"},
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid email or password"})),
        )
            .into_response()
    }
}

async fn register(State(_state): State<Backend>, Json(creds): Json<Credentials>) -> Response {
    let _ = creds.password;
    if creds.email == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Email already registered"})),
        )
            .into_response();
    }
    Json(json!({
        "id": "u2",
        "email": creds.email,
        "message": "User registered successfully. Please login.",
    }))
    .into_response()
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default = "default_folder")]
    folder: String,
    #[serde(default)]
    #[allow(dead_code)]
    skip: u64,
    #[serde(default)]
    #[allow(dead_code)]
    limit: u64,
}

fn default_folder() -> String {
    "root".to_string()
}

async fn list_files(
    State(state): State<Backend>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let inner = state.inner.lock().unwrap();
    let items: Vec<Value> = inner
        .files
        .iter()
        .filter(|f| f.folder == query.folder)
        .map(StoredFile::item_json)
        .collect();

    if inner.envelope {
        Json(json!({"files": items, "total": items.len()})).into_response()
    } else {
        Json(Value::Array(items)).into_response()
    }
}

#[derive(Deserialize)]
struct UploadQuery {
    #[serde(default = "default_folder")]
    folder: String,
}

async fn upload_file(
    State(state): State<Backend>,
    headers: HeaderMap,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }

    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("unknown").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await.unwrap().to_vec();

        let mut inner = state.inner.lock().unwrap();
        inner.next_id += 1;
        let file = StoredFile {
            id: format!("gen-{}", inner.next_id),
            filename,
            content_type,
            folder: query.folder.clone(),
            created_at: "2025-06-01T00:00:00Z".to_string(),
            data,
        };
        let response = json!({
            "id": file.id,
            "filename": file.filename,
            "size": file.data.len(),
            "created_at": file.created_at,
        });
        inner.files.push(file);
        return Json(response).into_response();
    }

    (
        StatusCode::BAD_REQUEST,
        Json(json!({"detail": "missing file field"})),
    )
        .into_response()
}

async fn delete_file(
    State(state): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let mut inner = state.inner.lock().unwrap();
    if inner.fail_delete {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "storage backend unavailable"})),
        )
            .into_response();
    }
    let before = inner.files.len();
    inner.files.retain(|f| f.id != id);
    if inner.files.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "File not found or access denied"})),
        )
            .into_response();
    }
    Json(json!({"message": "File deleted successfully"})).into_response()
}

#[derive(Deserialize)]
struct RenameQuery {
    new_name: String,
}

async fn rename_file(
    State(state): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<RenameQuery>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let mut inner = state.inner.lock().unwrap();
    match inner.files.iter_mut().find(|f| f.id == id) {
        Some(file) => {
            file.filename = query.new_name.clone();
            Json(json!({"filename": query.new_name})).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "File not found or access denied"})),
        )
            .into_response(),
    }
}

async fn download_file(
    State(state): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let inner = state.inner.lock().unwrap();
    match inner.files.iter().find(|f| f.id == id) {
        Some(file) => (
            [(header::CONTENT_TYPE, "application/octet-stream")],
            file.data.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "File not found or access denied"})),
        )
            .into_response(),
    }
}

async fn file_metadata(
    State(state): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let inner = state.inner.lock().unwrap();
    match inner.files.iter().find(|f| f.id == id) {
        Some(file) => Json(json!({
            "id": file.id,
            "filename": file.filename,
            "size": file.data.len(),
            "type": file.content_type,
            "hash": format!("hash-{}", file.id),
            "created_at": file.created_at,
            "updated_at": file.created_at,
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "File not found or access denied"})),
        )
            .into_response(),
    }
}

async fn dashboard(State(state): State<Backend>, headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let inner = state.inner.lock().unwrap();
    let total_bytes: u64 = inner.files.iter().map(|f| f.data.len() as u64).sum();
    Json(json!({
        "users": {"total": 2, "active": 2, "blocked": 0, "admins": 1},
        "files": {"total": inner.files.len(), "deleted": 0, "active": inner.files.len()},
        "storage": {
            "total_bytes": total_bytes,
            "total_gb": 0.0,
            "average_file_size_mb": 0.0,
        },
        "file_types": [{"type": "application/octet-stream", "count": inner.files.len()}],
    }))
    .into_response()
}

fn user_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"detail": "User not found"})),
    )
        .into_response()
}

async fn admin_list_users(State(state): State<Backend>, headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let inner = state.inner.lock().unwrap();
    let users: Vec<Value> = inner
        .users
        .iter()
        .map(|u| u.with_stats_json(&inner.files))
        .collect();
    Json(Value::Array(users)).into_response()
}

async fn admin_user_details(
    State(state): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let inner = state.inner.lock().unwrap();
    match inner.users.iter().find(|u| u.id == id) {
        Some(user) => {
            let mut details = user.with_stats_json(&inner.files);
            details["files"] = Value::Array(
                inner
                    .files
                    .iter()
                    .map(|f| {
                        json!({
                            "id": f.id,
                            "filename": f.filename,
                            "size": f.data.len(),
                            "type": f.content_type,
                            "created_at": f.created_at,
                        })
                    })
                    .collect(),
            );
            Json(details).into_response()
        }
        None => user_not_found(),
    }
}

async fn admin_toggle_status(
    State(state): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let mut inner = state.inner.lock().unwrap();
    match inner.users.iter_mut().find(|u| u.id == id) {
        Some(user) => {
            user.is_active = !user.is_active;
            let verb = if user.is_active { "unblocked" } else { "blocked" };
            Json(json!({
                "user_id": user.id,
                "is_active": user.is_active,
                "message": format!("User {verb} successfully"),
            }))
            .into_response()
        }
        None => user_not_found(),
    }
}

#[derive(Deserialize)]
struct RoleQuery {
    new_role: String,
}

async fn admin_change_role(
    State(state): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<RoleQuery>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let mut inner = state.inner.lock().unwrap();
    match inner.users.iter_mut().find(|u| u.id == id) {
        Some(user) => {
            user.role = query.new_role.clone();
            Json(json!({
                "user_id": user.id,
                "role": user.role,
                "message": "Role updated successfully",
            }))
            .into_response()
        }
        None => user_not_found(),
    }
}

async fn admin_delete_user(
    State(state): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let mut inner = state.inner.lock().unwrap();
    let before = inner.users.len();
    inner.users.retain(|u| u.id != id);
    if inner.users.len() == before {
        return user_not_found();
    }
    Json(json!({"message": "User and all associated files deleted"})).into_response()
}

#[derive(Deserialize)]
struct AdminFilesQuery {
    #[serde(default)]
    #[allow(dead_code)]
    skip: u64,
    #[serde(default)]
    #[allow(dead_code)]
    limit: u64,
    file_type: Option<String>,
}

async fn admin_list_files(
    State(state): State<Backend>,
    headers: HeaderMap,
    Query(query): Query<AdminFilesQuery>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let inner = state.inner.lock().unwrap();
    let files: Vec<Value> = inner
        .files
        .iter()
        .filter(|f| match &query.file_type {
            Some(t) => f.content_type.contains(t.as_str()),
            None => true,
        })
        .map(|f| {
            json!({
                "id": f.id,
                "filename": f.filename,
                "size": f.data.len(),
                "size_mb": 0.0,
                "type": f.content_type,
                "owner": {"id": "u1", "email": TEST_EMAIL, "username": null},
                "created_at": f.created_at,
            })
        })
        .collect();
    Json(Value::Array(files)).into_response()
}

async fn admin_delete_file(
    State(state): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let mut inner = state.inner.lock().unwrap();
    match inner.files.iter().position(|f| f.id == id) {
        Some(index) => {
            let file = inner.files.remove(index);
            Json(json!({
                "file_id": file.id,
                "filename": file.filename,
                "owner": TEST_EMAIL,
                "message": "File deleted successfully",
            }))
            .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "File not found"})),
        )
            .into_response(),
    }
}

async fn top_users(State(state): State<Backend>, headers: HeaderMap) -> Response {
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let inner = state.inner.lock().unwrap();
    let total_size: u64 = inner.files.iter().map(|f| f.data.len() as u64).sum();
    Json(json!([{
        "user_id": "u1",
        "email": TEST_EMAIL,
        "username": null,
        "file_count": inner.files.len(),
        "total_size": total_size,
        "total_size_mb": 0.0,
    }]))
    .into_response()
}
