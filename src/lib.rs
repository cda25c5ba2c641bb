//! Lucid: session and data-access core for a delirium scorecard dashboard.
//!
//! The interesting part of the dashboard is not its charts but its session
//! protocol: a persisted opaque token, a three-phase lifecycle
//! (loading / authenticated / unauthenticated), and role-gated route
//! admission. This crate implements that protocol headlessly, plus typed
//! clients for the scorecard statistics and admin user management, so any
//! front-end shell (web, TUI, CLI) can drive the same state machine.
//!
//! # Quick Start
//!
//! ```no_run
//! use lucid::prelude::*;
//!
//! # async fn example() -> lucid::error::Result<()> {
//! let config = LucidConfig::from_env();
//! let auth = config.auth_state();
//!
//! auth.validate_session().await;
//! if !auth.is_authenticated() {
//!     auth.login("alice", "hunter2").await?;
//! }
//!
//! let guard = RouteGuard::new().with_required_role(Role::Admin);
//! match guard.evaluate(&auth) {
//!     GuardOutcome::Allow(session) => println!("welcome {}", session.username),
//!     GuardOutcome::NavigateTo(route) => println!("go to {}", route.path()),
//!     GuardOutcome::Loading => println!("still resolving"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod prelude;
pub mod scorecard;
pub mod users;

#[cfg(feature = "cli")]
pub mod cli;
