//! Admin-only user management.
//!
//! The backend gates these endpoints on the `admin` role; this client maps
//! its verdicts (403 for a non-admin caller, 404 for a missing user) to
//! [`LucidError::Api`] without pre-checking anything locally.

use serde::{Deserialize, Serialize};

use crate::auth::{Role, Token};
use crate::error::{LucidError, Result};

const SIGNUP_PATH: &str = "/api/auth/signup";
const USERS_PATH: &str = "/api/users";

/// A managed user account as the admin endpoints return it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

/// Payload for creating a user, and for replacing one on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

/// HTTP client for the admin user-management endpoints.
///
/// # Example
/// ```no_run
/// use lucid::users::UsersClient;
/// use lucid::auth::Token;
///
/// # async fn example(token: Token) -> lucid::error::Result<()> {
/// let client = UsersClient::new("http://localhost:8000");
/// for user in client.list_users(&token).await? {
///     println!("{} <{}> {}", user.username, user.email, user.role);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UsersClient {
    client: reqwest::Client,
    base_url: String,
}

impl UsersClient {
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

    /// Create a user account.
    pub async fn create_user(&self, token: &Token, user: &NewUser) -> Result<UserRecord> {
        let resp = self
            .client
            .post(format!("{}{SIGNUP_PATH}", self.base_url))
            .bearer_auth(token.as_str())
            .json(user)
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// List all user accounts.
    pub async fn list_users(&self, token: &Token) -> Result<Vec<UserRecord>> {
        let resp = self
            .client
            .get(format!("{}{USERS_PATH}", self.base_url))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// Replace a user account's details.
    pub async fn update_user(
        &self,
        token: &Token,
        user_id: i64,
        user: &NewUser,
    ) -> Result<UserRecord> {
        let resp = self
            .client
            .put(format!("{}{USERS_PATH}/{user_id}", self.base_url))
            .bearer_auth(token.as_str())
            .json(user)
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// Delete a user account.
    pub async fn delete_user(&self, token: &Token, user_id: i64) -> Result<()> {
        let resp = self
            .client
            .delete(format!("{}{USERS_PATH}/{user_id}", self.base_url))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LucidError::api(status.as_u16(), Self::detail(resp).await));
        }
        Ok(())
    }

    async fn parse<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            return Err(LucidError::api(status.as_u16(), Self::detail(resp).await));
        }
        Ok(resp.json().await?)
    }

    /// Prefer the server's `detail` message; fall back to the raw body.
    async fn detail(resp: reqwest::Response) -> String {
        let raw = resp.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&raw) {
            Ok(body) if !body.detail.is_empty() => body.detail,
            _ => raw,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: String,
}
