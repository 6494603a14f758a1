pub mod admin;
pub mod auth;
#[allow(clippy::module_inception)]
mod client;
mod error;
pub mod files;

pub use client::ApiClient;
pub use error::ApiError;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// One implementation per backend endpoint; decoded at the boundary.
pub trait ApiRequest {
    type Response: DeserializeOwned;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;
}

/// Join an endpoint path onto the configured base URL.
///
/// `Url::join` treats the base path as a file component, so a base of
/// `http://host/api/v1` would lose its `/api/v1` prefix. Concatenate
/// segments instead.
pub(crate) fn endpoint(base: &Url, path: &str) -> Url {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).expect("endpoint path must form a valid URL")
}
