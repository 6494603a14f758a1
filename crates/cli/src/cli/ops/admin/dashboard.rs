use clap::Args;

use depot_client::api::admin::DashboardRequest;
use depot_client::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Dashboard;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Dashboard {
    type Error = DashboardError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let stats = ctx.client.call(DashboardRequest).await?;

        let mut lines = vec![
            "Users:".to_string(),
            format!("  total:   {}", stats.users.total),
            format!("  active:  {}", stats.users.active),
            format!("  blocked: {}", stats.users.blocked),
            format!("  admins:  {}", stats.users.admins),
            String::new(),
            "Files:".to_string(),
            format!("  total:   {}", stats.files.total),
            format!("  active:  {}", stats.files.active),
            format!("  deleted: {}", stats.files.deleted),
            String::new(),
            "Storage:".to_string(),
            format!("  total:        {} B ({} GB)", stats.storage.total_bytes, stats.storage.total_gb),
            format!("  avg file:     {} MB", stats.storage.average_file_size_mb),
        ];

        if !stats.file_types.is_empty() {
            lines.push(String::new());
            lines.push("File types:".to_string());
            for ft in &stats.file_types {
                lines.push(format!("  {}: {}", ft.content_type, ft.count));
            }
        }

        Ok(lines.join("\n"))
    }
}
