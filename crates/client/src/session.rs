use crate::api::auth::{LoginRequest, RegisterRequest, RegisterResponse};
use crate::api::{ApiClient, ApiError};
use crate::types::User;

/// The client's belief about the current authenticated user, independent of
/// backend-side token validity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
}

/// Owns the session state and its transitions. Starts out anonymous and
/// loading until [`check_auth`] runs the bootstrap path.
///
/// [`check_auth`]: SessionStore::check_auth
#[derive(Debug, Clone)]
pub struct SessionStore {
    client: ApiClient,
    session: Session,
}

impl SessionStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            session: Session {
                user: None,
                authenticated: false,
                loading: true,
            },
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Send credentials; on success persist the token and user record and
    /// transition to authenticated. On failure the store goes anonymous
    /// (loading cleared) and the error propagates to the caller.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.client.call(request).await {
            Ok(token) => {
                self.client
                    .state()
                    .persist_session(&token.access_token, &token.user)?;
                tracing::debug!(email = %token.user.email, "login succeeded");
                self.session = Session {
                    user: Some(token.user.clone()),
                    authenticated: true,
                    loading: false,
                };
                Ok(token.user)
            }
            Err(e) => {
                self.session.loading = false;
                Err(e)
            }
        }
    }

    /// Create an account. Success does not log the user in.
    pub async fn register(&mut self, email: &str, password: &str) -> Result<RegisterResponse, ApiError> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let result = self.client.call(request).await;
        self.session.loading = false;
        result
    }

    /// Clear the persisted token and user and go anonymous. Idempotent:
    /// logging out while already anonymous is a no-op.
    pub fn logout(&mut self) -> Result<(), ApiError> {
        self.client.state().clear_session()?;
        self.session = Session {
            user: None,
            authenticated: false,
            loading: false,
        };
        Ok(())
    }

    /// Bootstrap path, run once at startup: restore the session from the
    /// persisted user record without a live credential check. Always clears
    /// the loading flag.
    pub fn check_auth(&mut self) -> Result<(), ApiError> {
        let persisted = self.client.state().session()?;
        self.session = match persisted {
            Some(s) => Session {
                user: Some(s.user),
                authenticated: true,
                loading: false,
            },
            None => Session {
                user: None,
                authenticated: false,
                loading: false,
            },
        };
        Ok(())
    }
}
