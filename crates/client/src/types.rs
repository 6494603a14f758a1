use serde::{Deserialize, Serialize};

/// Account role as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// User record as returned by the backend. Immutable once received;
/// replaced wholesale on re-login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

/// A single entry in a folder listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileItem {
    pub id: String,
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type string.
    #[serde(rename = "type")]
    pub content_type: String,
    pub folder: String,
    pub created_at: String,
}

/// Extended record fetched on demand via the metadata endpoint. Not cached.
/// The backend omits `folder` here, unlike listing entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub id: String,
    pub filename: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    pub hash: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: User,
}

/// Aggregate counters for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub users: UserCounts,
    pub files: FileCounts,
    pub storage: StorageStats,
    pub file_types: Vec<FileTypeCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCounts {
    pub total: u64,
    pub active: u64,
    pub blocked: u64,
    pub admins: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCounts {
    pub total: u64,
    pub deleted: u64,
    pub active: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageStats {
    pub total_bytes: u64,
    pub total_gb: f64,
    pub average_file_size_mb: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeCount {
    #[serde(rename = "type")]
    pub content_type: String,
    pub count: u64,
}

/// User record with per-user storage statistics (admin listings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithStats {
    #[serde(flatten)]
    pub user: User,
    pub is_active: bool,
    pub is_verified: bool,
    pub stats: UserFileStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFileStats {
    pub file_count: u64,
    pub total_size: u64,
    pub total_size_mb: f64,
}
