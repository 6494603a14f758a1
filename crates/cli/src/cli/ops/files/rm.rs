use clap::Args;

use depot_client::{FileStore, FileStoreError};

#[derive(Args, Debug, Clone)]
pub struct Rm {
    /// File id
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RmError {
    #[error("delete failed: {0}")]
    Store(#[from] FileStoreError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Rm {
    type Error = RmError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut store = FileStore::new(ctx.client.clone());

        // Resolve the filename first so the confirmation names the file
        let filename = store.metadata(&self.id).await?.filename;
        store.delete_file(&self.id, &filename).await?;

        Ok(format!("Deleted {}", filename))
    }
}
