use reqwest::StatusCode;

use crate::state::StateError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("HTTP status {0}: {1}")]
    HttpStatus(StatusCode, String),
    /// The backend rejected our credentials. The persisted session has
    /// already been cleared by the time this surfaces.
    #[error("session expired: logged out")]
    AuthExpired,
    #[error("state error: {0}")]
    State(#[from] StateError),
}

/// Pull the structured `{"detail": ...}` message out of an error body when
/// present, falling back to the raw text.
pub(crate) fn error_detail(body: String) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }

    match serde_json::from_str::<Detail>(&body) {
        Ok(d) => d.detail,
        Err(_) => body,
    }
}
