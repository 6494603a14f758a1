use clap::Args;

use depot_client::api::admin::{
    ChangeUserRoleRequest, DeleteUserRequest, ListUsersRequest, ToggleUserStatusRequest,
    UserDetailsRequest,
};
use depot_client::{ApiError, Role};

#[derive(Debug, thiserror::Error)]
pub enum AdminUsersError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// `depot admin users` — list accounts with storage stats.
#[derive(Args, Debug, Clone)]
pub struct Users {
    #[arg(long, default_value_t = 0)]
    pub skip: u64,

    #[arg(long, default_value_t = 100)]
    pub limit: u64,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Users {
    type Error = AdminUsersError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let users = ctx
            .client
            .call(ListUsersRequest {
                skip: self.skip,
                limit: self.limit,
            })
            .await?;

        if users.is_empty() {
            return Ok("No users found".to_string());
        }

        let output = users
            .iter()
            .map(|u| {
                let status = if u.is_active { "active" } else { "blocked" };
                format!(
                    "{}  {}  [{}] {}  {} file(s), {} B",
                    u.user.id, u.user.email, u.user.role, status, u.stats.file_count, u.stats.total_size
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(output)
    }
}

/// `depot admin user <id>` — detailed view of one account.
#[derive(Args, Debug, Clone)]
pub struct UserInfo {
    /// User id
    pub id: String,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for UserInfo {
    type Error = AdminUsersError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let details = ctx
            .client
            .call(UserDetailsRequest {
                user_id: self.id.clone(),
            })
            .await?;

        let u = &details.user;
        let mut lines = vec![
            format!("email:    {}", u.user.email),
            format!("id:       {}", u.user.id),
            format!("role:     {}", u.user.role),
            format!("active:   {}", u.is_active),
            format!("verified: {}", u.is_verified),
            format!(
                "storage:  {} file(s), {} B ({} MB)",
                u.stats.file_count, u.stats.total_size, u.stats.total_size_mb
            ),
        ];

        if !details.files.is_empty() {
            lines.push("recent files:".to_string());
            for f in &details.files {
                lines.push(format!("  {}  {}  ({} B)", f.id, f.filename, f.size));
            }
        }

        Ok(lines.join("\n"))
    }
}

/// `depot admin toggle <id>` — block or unblock an account.
#[derive(Args, Debug, Clone)]
pub struct Toggle {
    /// User id
    pub id: String,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Toggle {
    type Error = AdminUsersError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx
            .client
            .call(ToggleUserStatusRequest {
                user_id: self.id.clone(),
            })
            .await?;
        Ok(response.message)
    }
}

/// `depot admin role <id> <role>` — change an account's role.
#[derive(Args, Debug, Clone)]
pub struct SetRole {
    /// User id
    pub id: String,

    /// New role
    #[arg(value_parser = ["user", "admin"])]
    pub role: String,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for SetRole {
    type Error = AdminUsersError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        // value_parser restricts to the two known roles
        let new_role = if self.role == "admin" { Role::Admin } else { Role::User };

        let response = ctx
            .client
            .call(ChangeUserRoleRequest {
                user_id: self.id.clone(),
                new_role,
            })
            .await?;
        Ok(response.message)
    }
}

/// `depot admin rm-user <id>` — delete an account outright.
#[derive(Args, Debug, Clone)]
pub struct RmUser {
    /// User id
    pub id: String,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for RmUser {
    type Error = AdminUsersError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx
            .client
            .call(DeleteUserRequest {
                user_id: self.id.clone(),
            })
            .await?;
        Ok(response.message)
    }
}
