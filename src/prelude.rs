//! Convenience re-exports for common use.

pub use crate::auth::{
    AuthError, AuthPhase, AuthState, FileTokenStore, MemoryTokenStore, Role, Route, Session,
    SessionApi, SessionClient, Token, TokenStore,
};
pub use crate::config::LucidConfig;
pub use crate::error::{LucidError, Result};
pub use crate::guard::{GuardOutcome, RouteGuard};
pub use crate::scorecard::ScorecardClient;
pub use crate::users::UsersClient;
