use std::path::PathBuf;

use clap::Args;

use depot_client::files::DEFAULT_FOLDER;
use depot_client::{FileStore, FileStoreError};

#[derive(Args, Debug, Clone)]
pub struct Upload {
    /// Path to the file to upload
    pub path: PathBuf,

    /// Destination folder (defaults to root)
    #[arg(long)]
    pub folder: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("upload failed: {0}")]
    Store(#[from] FileStoreError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Upload {
    type Error = UploadError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        if !self.path.is_file() {
            return Err(UploadError::NotFound(self.path.clone()));
        }

        let folder = self.folder.as_deref().unwrap_or(DEFAULT_FOLDER);
        let mut store = FileStore::with_folder(ctx.client.clone(), folder);
        let response = store.upload_file(&self.path).await?;

        Ok(format!(
            "Uploaded {} ({} bytes, id: {})",
            response.filename, response.size, response.id
        ))
    }
}
