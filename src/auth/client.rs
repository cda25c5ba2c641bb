use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::session::Session;
use super::token::Token;

const SESSION_PATH: &str = "/api/auth/session";
const SIGN_IN_PATH: &str = "/api/auth/signin";
const SIGN_OUT_PATH: &str = "/api/auth/signout";
const UPDATE_PASSWORD_PATH: &str = "/api/auth/update-password";

const LOGIN_FALLBACK: &str = "Login failed";
const PASSWORD_FALLBACK: &str = "Failed to update password";

/// Result of a successful sign-in: the issued token plus the identity it
/// belongs to.
#[derive(Debug, Clone)]
pub struct SignIn {
    pub token: Token,
    pub session: Session,
}

/// The backend's session endpoints, as a seam for mocking.
///
/// [`SessionClient`] is the HTTP implementation; tests drive
/// [`AuthState`](super::AuthState) through scripted implementations instead.
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Validate a stored token and fetch the session it identifies.
    async fn check_session(&self, token: &Token) -> Result<Session, AuthError>;

    /// Exchange credentials for a token and session.
    async fn sign_in(&self, username: &str, password: &str) -> Result<SignIn, AuthError>;

    /// Invalidate the token server-side.
    async fn sign_out(&self, token: &Token) -> Result<(), AuthError>;

    /// Change the authenticated user's password.
    async fn update_password(
        &self,
        token: &Token,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError>;
}

/// HTTP client for the backend's session endpoints.
///
/// # Example
/// ```no_run
/// use lucid::auth::{SessionApi, SessionClient};
///
/// # async fn example() -> Result<(), lucid::auth::AuthError> {
/// let client = SessionClient::new("http://localhost:8000");
/// let signed_in = client.sign_in("alice", "hunter2").await?;
/// println!("hello {}", signed_in.session.username);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SessionClient {
    client: reqwest::Client,
    base_url: String,
}

impl SessionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Extract the server's `detail` message from an error body, falling back
    /// to a fixed message when the body has none.
    async fn error_detail(resp: reqwest::Response, fallback: &str) -> String {
        match resp.json::<ErrorBody>().await {
            Ok(body) if !body.detail.is_empty() => body.detail,
            _ => fallback.to_string(),
        }
    }
}

#[async_trait]
impl SessionApi for SessionClient {
    async fn check_session(&self, token: &Token) -> Result<Session, AuthError> {
        let resp = self
            .client
            .get(self.url(SESSION_PATH))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(AuthError::Unauthorized);
        }
        let payload: SessionEnvelope = resp.json().await?;
        Ok(payload.user)
    }

    async fn sign_in(&self, username: &str, password: &str) -> Result<SignIn, AuthError> {
        let resp = self
            .client
            .post(self.url(SIGN_IN_PATH))
            .json(&SignInRequest { username, password })
            .send()
            .await?;
        if !resp.status().is_success() {
            let detail = Self::error_detail(resp, LOGIN_FALLBACK).await;
            return Err(AuthError::InvalidCredentials(detail));
        }
        let payload: SignInResponse = resp.json().await?;
        Ok(SignIn {
            token: Token::new(payload.access_token),
            session: payload.user,
        })
    }

    async fn sign_out(&self, token: &Token) -> Result<(), AuthError> {
        let resp = self
            .client
            .post(self.url(SIGN_OUT_PATH))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(AuthError::Unauthorized);
        }
        Ok(())
    }

    async fn update_password(
        &self,
        token: &Token,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let resp = self
            .client
            .post(self.url(UPDATE_PASSWORD_PATH))
            .bearer_auth(token.as_str())
            .json(&UpdatePasswordRequest {
                current_password,
                new_password,
            })
            .send()
            .await?;
        if !resp.status().is_success() {
            let detail = Self::error_detail(resp, PASSWORD_FALLBACK).await;
            return Err(AuthError::PasswordUpdateRejected(detail));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    user: Session,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    access_token: String,
    user: Session,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: String,
}
