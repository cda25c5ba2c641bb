use thiserror::Error;

use crate::error::LucidError;

/// Session and credential errors surfaced by the auth subsystem.
///
/// The message-carrying variants hold the server's `detail` text verbatim so
/// callers can show it to the user unchanged.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No authentication token found")]
    NotAuthenticated,
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    PasswordUpdateRejected(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<std::io::Error> for AuthError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<toml::de::Error> for AuthError {
    fn from(error: toml::de::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<toml::ser::Error> for AuthError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<AuthError> for LucidError {
    fn from(error: AuthError) -> Self {
        LucidError::Authentication(error.to_string())
    }
}
