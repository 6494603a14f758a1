use clap::Args;

use depot_client::{FileStore, FileStoreError};

#[derive(Args, Debug, Clone)]
pub struct Ls {
    /// Folder to list (defaults to root)
    #[arg(long)]
    pub folder: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LsError {
    #[error("listing failed: {0}")]
    Store(#[from] FileStoreError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Ls {
    type Error = LsError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut store = FileStore::new(ctx.client.clone());
        store.load_files(self.folder.as_deref()).await?;

        if store.files().is_empty() {
            return Ok(format!("No files in '{}'", store.folder()));
        }

        let mut lines: Vec<String> = store
            .files()
            .iter()
            .map(|f| format!("{}  {:>10} B  {}  [{}]", f.id, f.size, f.filename, f.content_type))
            .collect();
        lines.push(format!("{} file(s) in '{}'", store.total(), store.folder()));
        Ok(lines.join("\n"))
    }
}
