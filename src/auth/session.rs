use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Authenticated identity attached to a validated session.
///
/// Returned inside the `{ "user": ... }` envelope by the session endpoint and
/// alongside the token by sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub username: String,
    pub role: Role,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Access level attached to a session.
///
/// `admin` unlocks user management; `viewer` covers the scorecard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Viewer,
}
