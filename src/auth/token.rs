use serde::{Deserialize, Serialize};

/// Opaque bearer credential issued by the backend at sign-in.
///
/// The token is never parsed or inspected client-side: it is saved to a
/// [`TokenStore`](super::TokenStore), replayed in the `Authorization` header
/// of authenticated requests, and erased on sign-out or rejection.
///
/// # Example
/// ```
/// use lucid::auth::Token;
///
/// let token = Token::new("eyJhbGciOi...");
/// assert_eq!(token.as_str(), "eyJhbGciOi...");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token").field(&"..").finish()
    }
}
