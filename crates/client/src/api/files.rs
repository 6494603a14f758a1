use reqwest::{multipart, Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use super::{endpoint, ApiRequest};
use crate::types::{FileItem, FileMetadata};

/// `GET /files/?folder=&skip=&limit=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFilesRequest {
    pub folder: String,
    pub skip: u64,
    pub limit: u64,
}

/// The listing endpoint has two observed response shapes: a bare array of
/// items, or an `{files, total}` envelope. Both are decoded here, at the
/// boundary, into one union.
///
/// TODO: flag to the backend owner that a single canonical shape would
/// remove this branch entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileListing {
    Envelope { files: Vec<FileItem>, total: u64 },
    Bare(Vec<FileItem>),
}

impl FileListing {
    /// Normalize either shape into (items, total). A bare array reports its
    /// own length as the total.
    pub fn into_parts(self) -> (Vec<FileItem>, u64) {
        match self {
            FileListing::Envelope { files, total } => (files, total),
            FileListing::Bare(files) => {
                let total = files.len() as u64;
                (files, total)
            }
        }
    }
}

impl ApiRequest for ListFilesRequest {
    type Response = FileListing;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, "/files/")).query(&self)
    }
}

/// `POST /files/upload?folder=` (multipart form field `file`)
#[derive(Debug, Clone)]
pub struct UploadFileRequest {
    pub folder: String,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// The backend replies with a partial record; the full entry arrives with
/// the next listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    pub filename: String,
    pub size: u64,
    pub created_at: String,
}

impl ApiRequest for UploadFileRequest {
    type Response = UploadResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let part = multipart::Part::bytes(self.data)
            .file_name(self.filename)
            .mime_str(&self.content_type)
            .expect("content type from mime_guess is a valid MIME string");
        let form = multipart::Form::new().part("file", part);

        client
            .post(endpoint(base_url, "/files/upload"))
            .query(&[("folder", &self.folder)])
            .multipart(form)
    }
}

/// `DELETE /files/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteFileRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl ApiRequest for DeleteFileRequest {
    type Response = DeleteResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.delete(endpoint(base_url, &format!("/files/{}", self.id)))
    }
}

/// `PATCH /files/{id}?new_name=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameFileRequest {
    pub id: String,
    pub new_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameResponse {
    pub filename: String,
}

impl ApiRequest for RenameFileRequest {
    type Response = RenameResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client
            .patch(endpoint(base_url, &format!("/files/{}", self.id)))
            .query(&[("new_name", &self.new_name)])
    }
}

/// `GET /files/{id}/metadata`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadataRequest {
    pub id: String,
}

impl ApiRequest for FileMetadataRequest {
    type Response = FileMetadata;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, &format!("/files/{}/metadata", self.id)))
    }
}

/// `GET /files/{id}/download` — binary payload, so this one bypasses the
/// JSON-decoding [`ApiRequest`] path and is sent via [`ApiClient::execute`].
///
/// [`ApiClient::execute`]: super::ApiClient::execute
#[derive(Debug, Clone)]
pub struct DownloadFileRequest {
    pub id: String,
}

impl DownloadFileRequest {
    pub fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        client.get(endpoint(base_url, &format!("/files/{}/download", self.id)))
    }
}
