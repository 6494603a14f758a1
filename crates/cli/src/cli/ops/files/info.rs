use clap::Args;

use depot_client::{FileStore, FileStoreError};

#[derive(Args, Debug, Clone)]
pub struct Info {
    /// File id
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    #[error("metadata fetch failed: {0}")]
    Store(#[from] FileStoreError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Info {
    type Error = InfoError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let store = FileStore::new(ctx.client.clone());
        let meta = store.metadata(&self.id).await?;

        let mut lines = vec![
            format!("id:         {}", meta.id),
            format!("filename:   {}", meta.filename),
            format!("size:       {} B", meta.size),
            format!("type:       {}", meta.content_type),
            format!("hash:       {}", meta.hash),
            format!("created_at: {}", meta.created_at),
            format!("updated_at: {}", meta.updated_at),
        ];
        if let Some(folder) = &meta.folder {
            lines.insert(2, format!("folder:     {}", folder));
        }
        Ok(lines.join("\n"))
    }
}
