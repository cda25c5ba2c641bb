//! Route admission checks for guarded views.
//!
//! A [`RouteGuard`] turns the current [`AuthState`] into a
//! [`GuardOutcome`]: render a loading placeholder, render the view, or
//! navigate away. The evaluation is a pure function of current state, so
//! consumers re-run it on every phase change.

use crate::auth::{AuthPhase, AuthState, Role, Route, Session};

/// Admission policy for one guarded view.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use lucid::auth::{AuthState, MemoryTokenStore, Role, SessionClient};
/// use lucid::guard::{GuardOutcome, RouteGuard};
///
/// # async fn example() {
/// let auth = AuthState::new(
///     Arc::new(SessionClient::new("http://localhost:8000")),
///     Arc::new(MemoryTokenStore::new()),
/// );
/// let guard = RouteGuard::new().with_required_role(Role::Admin);
/// match guard.wait_settled(&auth).await {
///     GuardOutcome::Allow(session) => println!("welcome {}", session.username),
///     GuardOutcome::NavigateTo(route) => println!("redirect to {}", route.path()),
///     GuardOutcome::Loading => unreachable!("wait_settled never returns Loading"),
/// }
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    required_role: Option<Role>,
}

/// What a guarded view should do right now.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// Session still resolving; render a placeholder, do not navigate.
    Loading,
    /// Render the view for this session.
    Allow(Session),
    /// Do not render; send the user here instead.
    NavigateTo(Route),
}

impl RouteGuard {
    /// A guard that admits any authenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Additionally require a role; sessions with any other role are sent to
    /// [`Route::Unauthorized`].
    pub fn with_required_role(mut self, role: Role) -> Self {
        self.required_role = Some(role);
        self
    }

    /// Evaluate admission against the current state.
    ///
    /// An `Authenticated` phase is double-checked against
    /// [`AuthState::is_authenticated`], so a token cleared out-of-band
    /// redirects to login instead of rendering with a dead session.
    pub fn evaluate(&self, auth: &AuthState) -> GuardOutcome {
        match auth.phase() {
            AuthPhase::Loading => GuardOutcome::Loading,
            AuthPhase::Unauthenticated => GuardOutcome::NavigateTo(Route::Login),
            AuthPhase::Authenticated(session) => {
                if !auth.is_authenticated() {
                    return GuardOutcome::NavigateTo(Route::Login);
                }
                if let Some(required) = self.required_role {
                    if session.role != required {
                        return GuardOutcome::NavigateTo(Route::Unauthorized);
                    }
                }
                GuardOutcome::Allow(session)
            }
        }
    }

    /// Wait for the phase to settle, then evaluate.
    ///
    /// Never returns [`GuardOutcome::Loading`]: the returned outcome reflects
    /// the first settled phase observed after the call.
    pub async fn wait_settled(&self, auth: &AuthState) -> GuardOutcome {
        let mut rx = auth.watch_phase();
        // The sender lives inside `auth`, which we borrow, so wait_for cannot
        // observe a closed channel here.
        let _ = rx
            .wait_for(|phase| !matches!(phase, AuthPhase::Loading))
            .await;
        self.evaluate(auth)
    }
}
