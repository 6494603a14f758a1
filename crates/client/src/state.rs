use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::User;

pub const APP_NAME: &str = "depot";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the backend API
    #[serde(default = "default_api_url")]
    pub api_url: Url,
}

fn default_api_url() -> Url {
    Url::parse("http://localhost:8000/api/v1").expect("hardcoded URL must parse")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

/// Access token and user record persisted after a successful login.
/// Written together on login, removed together on logout or any 401.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the depot directory (~/.depot)
    pub depot_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Path to the persisted session file
    pub session_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the depot directory path (custom or default ~/.depot)
    pub fn depot_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        // Use home directory directly since we want ~/.depot
        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Open the depot state directory, creating it with a default config on
    /// first use.
    pub fn open(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let depot_dir = Self::depot_dir(custom_path)?;
        let config_path = depot_dir.join(CONFIG_FILE_NAME);
        let session_path = depot_dir.join(SESSION_FILE_NAME);

        if !depot_dir.exists() {
            fs::create_dir_all(&depot_dir)?;
        }

        let config = if config_path.exists() {
            let config_toml = fs::read_to_string(&config_path)?;
            toml::from_str(&config_toml)?
        } else {
            let config = AppConfig::default();
            let config_toml = toml::to_string_pretty(&config)?;
            fs::write(&config_path, config_toml)?;
            config
        };

        Ok(Self {
            depot_dir,
            config_path,
            session_path,
            config,
        })
    }

    /// Persist the session record after a successful login. This is the only
    /// place a token is ever written.
    pub fn persist_session(&self, token: &str, user: &User) -> Result<(), StateError> {
        let session = PersistedSession {
            access_token: token.to_string(),
            user: user.clone(),
        };
        let json = serde_json::to_string_pretty(&session)?;
        fs::write(&self.session_path, json)?;
        Ok(())
    }

    /// Read the persisted session, if any. A missing file reads as no
    /// session rather than an error.
    pub fn session(&self) -> Result<Option<PersistedSession>, StateError> {
        if !self.session_path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.session_path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// The persisted access token, if a session exists and parses.
    pub fn access_token(&self) -> Option<String> {
        self.session().ok().flatten().map(|s| s.access_token)
    }

    /// Remove the persisted session. Idempotent: clearing an absent session
    /// is a no-op.
    pub fn clear_session(&self) -> Result<(), StateError> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
