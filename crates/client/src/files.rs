use std::path::{Path, PathBuf};

use crate::api::files::{
    DeleteFileRequest, DownloadFileRequest, FileMetadataRequest, ListFilesRequest,
    RenameFileRequest, UploadFileRequest, UploadResponse,
};
use crate::api::{ApiClient, ApiError};
use crate::types::{FileItem, FileMetadata};

pub const DEFAULT_FOLDER: &str = "root";
const DEFAULT_LIMIT: u64 = 20;

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Local snapshot of one folder's file list, kept in sync with backend
/// state after every mutating operation.
///
/// Every mutation is followed by a full reload rather than local patching:
/// the backend is the sole source of ordering and membership, so we trade
/// an extra round trip for guaranteed consistency. Overlapping loads are
/// last-write-wins on the snapshot.
#[derive(Debug, Clone)]
pub struct FileStore {
    client: ApiClient,
    folder: String,
    files: Vec<FileItem>,
    total: u64,
    loading: bool,
}

impl FileStore {
    pub fn new(client: ApiClient) -> Self {
        Self::with_folder(client, DEFAULT_FOLDER)
    }

    /// A store scoped to a folder other than the default.
    pub fn with_folder(client: ApiClient, folder: &str) -> Self {
        Self {
            client,
            folder: folder.to_string(),
            files: Vec::new(),
            total: 0,
            loading: false,
        }
    }

    /// The most recently loaded snapshot.
    pub fn files(&self) -> &[FileItem] {
        &self.files
    }

    /// Count reported by the last listing response. For a bare-array
    /// response this equals the snapshot length.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Fetch the file list for a folder (current folder when `None`) and
    /// replace the snapshot. On failure the existing snapshot is left
    /// untouched and the error is reported.
    pub async fn load_files(&mut self, folder: Option<&str>) -> Result<(), FileStoreError> {
        let folder = folder.unwrap_or(&self.folder).to_string();
        let request = ListFilesRequest {
            folder: folder.clone(),
            skip: 0,
            limit: DEFAULT_LIMIT,
        };

        self.loading = true;
        let result = self.client.call(request).await;
        self.loading = false;

        let (files, total) = result?.into_parts();
        tracing::debug!(folder = %folder, count = files.len(), total, "loaded file list");
        self.folder = folder;
        self.files = files;
        self.total = total;
        Ok(())
    }

    /// Upload a file into the current folder, then resynchronize with a
    /// fresh load rather than optimistically appending the new entry.
    pub async fn upload_file(&mut self, path: &Path) -> Result<UploadResponse, FileStoreError> {
        let data = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        let request = UploadFileRequest {
            folder: self.folder.clone(),
            filename,
            content_type,
            data,
        };

        let response = self.client.call(request).await?;
        tracing::debug!(filename = %response.filename, "uploaded, reloading list");
        self.load_files(None).await?;
        Ok(response)
    }

    /// Delete by id, then resynchronize. On failure the item stays in the
    /// local snapshot so the view never claims a delete the backend
    /// rejected.
    pub async fn delete_file(&mut self, id: &str, filename: &str) -> Result<(), FileStoreError> {
        let request = DeleteFileRequest { id: id.to_string() };
        self.client.call(request).await?;
        tracing::debug!(%id, %filename, "deleted, reloading list");
        self.load_files(None).await?;
        Ok(())
    }

    /// Rename by id, then resynchronize.
    pub async fn rename_file(&mut self, id: &str, new_name: &str) -> Result<(), FileStoreError> {
        let request = RenameFileRequest {
            id: id.to_string(),
            new_name: new_name.to_string(),
        };
        self.client.call(request).await?;
        self.load_files(None).await?;
        Ok(())
    }

    /// Fetch binary content and save it under `filename` in `dest_dir`,
    /// writing through a transient temp file that is released once the
    /// final name is in place. Does not touch the snapshot.
    pub async fn download_file(
        &self,
        id: &str,
        filename: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, FileStoreError> {
        let request = DownloadFileRequest { id: id.to_string() };
        let response = self
            .client
            .execute(request.build_request(self.client.base_url(), self.client.http_client()))
            .await?;
        let data = response.bytes().await.map_err(ApiError::from)?;

        let dest = dest_dir.join(filename);
        let tmp = tempfile::NamedTempFile::new_in(dest_dir)?;
        std::fs::write(tmp.path(), &data)?;
        tmp.persist(&dest).map_err(|e| e.error)?;

        tracing::debug!(%id, path = %dest.display(), "downloaded file");
        Ok(dest)
    }

    /// Fetch extended metadata on demand. Never cached.
    pub async fn metadata(&self, id: &str) -> Result<FileMetadata, FileStoreError> {
        let request = FileMetadataRequest { id: id.to_string() };
        Ok(self.client.call(request).await?)
    }
}
