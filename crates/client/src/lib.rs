//! Client library for the depot file-storage service.
//!
//! The backend is an external collaborator reached only through its REST
//! contract. This crate owns the client side of that contract: the HTTP
//! wrapper ([`api::ApiClient`]), the session state machine
//! ([`session::SessionStore`]), the folder-snapshot synchronization
//! ([`files::FileStore`]), and the persisted token/user state
//! ([`state::AppState`]).

pub mod api;
pub mod files;
pub mod session;
pub mod state;
pub mod types;
pub mod validate;

pub use api::{ApiClient, ApiError};
pub use files::{FileStore, FileStoreError};
pub use session::{Session, SessionStore};
pub use state::{AppConfig, AppState, PersistedSession, StateError};
pub use types::{FileItem, FileMetadata, Role, TokenResponse, User};
