use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::token::Token;

const TOKEN_FILE: &str = "session.toml";

/// Storage abstraction for the persisted session token.
///
/// The crate holds at most one token at a time. There is no expiry logic
/// here; a stale token simply fails validation on the next session check.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<Token>, AuthError>;
    fn save(&self, token: &Token) -> Result<(), AuthError>;
    fn clear(&self) -> Result<(), AuthError>;
}

/// File-backed token store using a TOML file.
///
/// # Example
/// ```no_run
/// use lucid::auth::{FileTokenStore, Token, TokenStore};
///
/// let store = FileTokenStore::new_default();
/// store.save(&Token::new("bearer-token"))?;
/// assert!(store.load()?.is_some());
/// # Ok::<(), lucid::auth::AuthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    base_dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn new_default() -> Self {
        Self {
            base_dir: default_lucid_dir(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base_dir.join(TOKEN_FILE)
    }

    fn ensure_parent(path: &Path) -> Result<(), AuthError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<Token>, AuthError> {
        let path = self.token_path();
        let raw = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(AuthError::Io(err.to_string())),
        };
        let file: TokenFile = toml::from_str(&raw)?;
        Ok(Some(file.token))
    }

    fn save(&self, token: &Token) -> Result<(), AuthError> {
        let path = self.token_path();
        Self::ensure_parent(&path)?;
        let file = TokenFile {
            version: 1,
            token: token.clone(),
            saved_at: DateTime::<Utc>::from(std::time::SystemTime::now()),
        };
        let serialized = toml::to_string(&file)?;
        fs::write(&path, serialized)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AuthError::Io(err.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenFile {
    version: u32,
    token: Token,
    saved_at: DateTime<Utc>,
}

/// In-memory token store for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<Token>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Option<Token>>, AuthError> {
        self.token
            .lock()
            .map_err(|_| AuthError::Io("token store lock poisoned".to_string()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<Token>, AuthError> {
        Ok(self.guard()?.clone())
    }

    fn save(&self, token: &Token) -> Result<(), AuthError> {
        *self.guard()? = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.guard()?.take();
        Ok(())
    }
}

fn default_lucid_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".lucid"))
        .unwrap_or_else(|| PathBuf::from(".lucid"))
}
