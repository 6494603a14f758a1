//! Admin surface of the backend contract. Every endpoint here requires the
//! elevated role; that check lives server-side, so a plain user simply gets
//! a structured 403 back.

use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use super::{endpoint, ApiRequest};
use crate::types::{DashboardStats, Role, UserWithStats};

/// `GET /admin/dashboard`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRequest;

impl ApiRequest for DashboardRequest {
    type Response = DashboardStats;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, "/admin/dashboard"))
    }
}

/// `GET /admin/users?skip=&limit=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersRequest {
    pub skip: u64,
    pub limit: u64,
}

impl ApiRequest for ListUsersRequest {
    type Response = Vec<UserWithStats>;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, "/admin/users")).query(&self)
    }
}

/// `GET /admin/users/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetailsRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(flatten)]
    pub user: UserWithStats,
    /// Most recent files only; the backend caps this list.
    pub files: Vec<UserFileSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFileSummary {
    pub id: String,
    pub filename: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
    pub created_at: String,
}

impl ApiRequest for UserDetailsRequest {
    type Response = UserDetails;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, &format!("/admin/users/{}", self.user_id)))
    }
}

/// `PATCH /admin/users/{id}/toggle-status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleUserStatusRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleStatusResponse {
    pub user_id: String,
    pub is_active: bool,
    pub message: String,
}

impl ApiRequest for ToggleUserStatusRequest {
    type Response = ToggleStatusResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.patch(endpoint(
            base_url,
            &format!("/admin/users/{}/toggle-status", self.user_id),
        ))
    }
}

/// `PATCH /admin/users/{id}/role?new_role=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeUserRoleRequest {
    pub user_id: String,
    pub new_role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleResponse {
    pub user_id: String,
    pub role: Role,
    pub message: String,
}

impl ApiRequest for ChangeUserRoleRequest {
    type Response = ChangeRoleResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client
            .patch(endpoint(
                base_url,
                &format!("/admin/users/{}/role", self.user_id),
            ))
            .query(&[("new_role", self.new_role.to_string())])
    }
}

/// `DELETE /admin/users/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

impl ApiRequest for DeleteUserRequest {
    type Response = DeleteUserResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.delete(endpoint(base_url, &format!("/admin/users/{}", self.user_id)))
    }
}

/// `GET /admin/files?skip=&limit=&file_type=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAllFilesRequest {
    pub skip: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminFile {
    pub id: String,
    pub filename: String,
    pub size: u64,
    pub size_mb: f64,
    #[serde(rename = "type")]
    pub content_type: String,
    pub owner: FileOwner,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOwner {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl ApiRequest for ListAllFilesRequest {
    type Response = Vec<AdminFile>;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, "/admin/files")).query(&self)
    }
}

/// `DELETE /admin/files/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDeleteFileRequest {
    pub file_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDeleteFileResponse {
    pub file_id: String,
    pub filename: String,
    pub owner: String,
    pub message: String,
}

impl ApiRequest for AdminDeleteFileRequest {
    type Response = AdminDeleteFileResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.delete(endpoint(base_url, &format!("/admin/files/{}", self.file_id)))
    }
}

/// `GET /admin/top-users?limit=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopUsersRequest {
    pub limit: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopUser {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    pub file_count: u64,
    pub total_size: u64,
    #[serde(default)]
    pub total_size_mb: Option<f64>,
}

impl ApiRequest for TopUsersRequest {
    type Response = Vec<TopUser>;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, "/admin/top-users")).query(&self)
    }
}
