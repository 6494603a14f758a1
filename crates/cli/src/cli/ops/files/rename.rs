use clap::Args;

use depot_client::{FileStore, FileStoreError};

#[derive(Args, Debug, Clone)]
pub struct Rename {
    /// File id
    pub id: String,

    /// New filename
    pub new_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("rename failed: {0}")]
    Store(#[from] FileStoreError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Rename {
    type Error = RenameError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut store = FileStore::new(ctx.client.clone());
        store.rename_file(&self.id, &self.new_name).await?;
        Ok(format!("Renamed to {}", self.new_name))
    }
}
