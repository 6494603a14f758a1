use clap::Args;

use depot_client::api::admin::{AdminDeleteFileRequest, ListAllFilesRequest};
use depot_client::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum AdminFilesError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// `depot admin files` — every file in the system, any owner.
#[derive(Args, Debug, Clone)]
pub struct AdminFiles {
    #[arg(long, default_value_t = 0)]
    pub skip: u64,

    #[arg(long, default_value_t = 100)]
    pub limit: u64,

    /// Filter by MIME type substring
    #[arg(long)]
    pub file_type: Option<String>,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for AdminFiles {
    type Error = AdminFilesError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let files = ctx
            .client
            .call(ListAllFilesRequest {
                skip: self.skip,
                limit: self.limit,
                file_type: self.file_type.clone(),
            })
            .await?;

        if files.is_empty() {
            return Ok("No files found".to_string());
        }

        let output = files
            .iter()
            .map(|f| {
                format!(
                    "{}  {}  ({} B)  [{}]  owner: {}",
                    f.id, f.filename, f.size, f.content_type, f.owner.email
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(output)
    }
}

/// `depot admin rm-file <id>` — delete any user's file.
#[derive(Args, Debug, Clone)]
pub struct RmFile {
    /// File id
    pub id: String,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for RmFile {
    type Error = AdminFilesError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx
            .client
            .call(AdminDeleteFileRequest {
                file_id: self.id.clone(),
            })
            .await?;
        Ok(format!("{} ({})", response.message, response.filename))
    }
}
