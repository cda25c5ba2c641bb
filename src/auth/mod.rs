//! Session lifecycle, token storage, and the backend auth client.

pub mod client;
pub mod error;
pub mod session;
pub mod state;
pub mod store;
pub mod token;

pub use client::{SessionApi, SessionClient, SignIn};
pub use error::AuthError;
pub use session::{Role, Session};
pub use state::{AuthPhase, AuthState, NavigationSink, Route};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use token::Token;
