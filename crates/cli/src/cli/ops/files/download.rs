use std::path::PathBuf;

use clap::Args;

use depot_client::{FileStore, FileStoreError};

#[derive(Args, Debug, Clone)]
pub struct Download {
    /// File id
    pub id: String,

    /// Save under this name (defaults to the backend's filename)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to save into (defaults to the current directory)
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("download failed: {0}")]
    Store(#[from] FileStoreError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Download {
    type Error = DownloadError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let store = FileStore::new(ctx.client.clone());

        let filename = match &self.name {
            Some(name) => name.clone(),
            None => store.metadata(&self.id).await?.filename,
        };

        let dest = store
            .download_file(&self.id, &filename, &self.output_dir)
            .await?;
        Ok(format!("Saved {}", dest.display()))
    }
}
