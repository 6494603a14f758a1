use reqwest::{header::HeaderMap, header::HeaderValue, Client, RequestBuilder, Response, StatusCode};
use url::Url;

use super::error::error_detail;
use super::{ApiError, ApiRequest};
use crate::state::AppState;

/// HTTP wrapper around the backend contract.
///
/// Every request goes out against the one configured base URL with a bearer
/// token attached when one is persisted. A 401 from any endpoint clears the
/// persisted session as a side effect; the wrapper never writes a token
/// itself (only the session store does, after login).
#[derive(Debug, Clone)]
pub struct ApiClient {
    remote: Url,
    client: Client,
    state: AppState,
}

impl ApiClient {
    pub fn new(remote: &Url, state: AppState) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
            state,
        })
    }

    /// Send a typed request and decode its JSON response.
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let response = self
            .execute(request.build_request(&self.remote, &self.client))
            .await?;
        Ok(response.json::<T::Response>().await?)
    }

    /// Send a prepared request through the wrapper, applying the bearer
    /// token and the shared error handling. Used directly for binary
    /// downloads where the response is not JSON.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let builder = match self.state.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = error_detail(response.text().await.unwrap_or_default());

        // Authentication rejections are handled exactly once, here, for
        // every endpoint: drop the persisted session and report the forced
        // logout. Never retried.
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(detail = %detail, "backend rejected credentials, clearing session");
            self.state.clear_session()?;
            return Err(ApiError::AuthExpired);
        }

        tracing::debug!(%status, detail = %detail, "request failed");
        Err(ApiError::HttpStatus(status, detail))
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }

    /// Get the underlying HTTP client for custom requests
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Persisted client state backing this client.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
