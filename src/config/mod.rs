//! Configuration: backend location plus token-store wiring.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::auth::store::{FileTokenStore, TokenStore};
use crate::auth::{AuthState, SessionClient};
use crate::scorecard::ScorecardClient;
use crate::users::UsersClient;

/// Global default config (lazy-initialized from env).
static DEFAULT_CONFIG: OnceLock<LucidConfig> = OnceLock::new();

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: &str = "8000";

/// Where the backend lives and where the session token is kept.
///
/// Construct one per backend, or use [`LucidConfig::global`] for the
/// environment-derived default. The factory methods hand out clients and the
/// session machine wired to the same backend and store.
#[derive(Clone)]
pub struct LucidConfig {
    base_url: String,
    token_store: Arc<dyn TokenStore>,
}

impl fmt::Debug for LucidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LucidConfig")
            .field("base_url", &self.base_url)
            .field("token_store", &"..")
            .finish()
    }
}

impl Default for LucidConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LucidConfig {
    /// Default config: local backend, file-backed token store.
    pub fn new() -> Self {
        Self {
            base_url: format!("http://{DEFAULT_HOST}:{DEFAULT_PORT}"),
            token_store: Arc::new(FileTokenStore::new_default()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = store;
        self
    }

    /// Load from environment variables (`LUCID_BACKEND_HOST`,
    /// `LUCID_BACKEND_PORT`).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let host =
            std::env::var("LUCID_BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port =
            std::env::var("LUCID_BACKEND_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        Self::new().with_base_url(format!("http://{host}:{port}"))
    }

    /// Get (or create) the global default config.
    pub fn global() -> &'static LucidConfig {
        DEFAULT_CONFIG.get_or_init(Self::from_env)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle to the configured token store.
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        self.token_store.clone()
    }

    /// Session endpoints client pointed at this backend.
    pub fn session_client(&self) -> SessionClient {
        SessionClient::new(&self.base_url)
    }

    /// Scorecard statistics client pointed at this backend.
    pub fn scorecard_client(&self) -> ScorecardClient {
        ScorecardClient::new(&self.base_url)
    }

    /// Admin user-management client pointed at this backend.
    pub fn users_client(&self) -> UsersClient {
        UsersClient::new(&self.base_url)
    }

    /// The session machine wired to this backend and token store.
    pub fn auth_state(&self) -> AuthState {
        AuthState::new(Arc::new(self.session_client()), self.token_store.clone())
    }
}
