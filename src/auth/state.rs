//! Session lifecycle state machine.
//!
//! [`AuthState`] owns the relationship between the persisted token and the
//! in-memory session:
//! - [`AuthState::validate_session`]: restore a session from a stored token
//! - [`AuthState::login`]: exchange credentials for a session
//! - [`AuthState::logout`]: tear the session down, locally no matter what
//! - [`AuthState::update_password`]: change the password without touching
//!   the session
//!
//! The current [`AuthPhase`] is observable through a `watch` channel; view
//! code re-evaluates its [`RouteGuard`](crate::guard::RouteGuard) on every
//! change.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use super::client::SessionApi;
use super::error::AuthError;
use super::session::Session;
use super::store::TokenStore;
use super::token::Token;

/// Where the session machine is in its lifecycle.
///
/// `Loading` is the initial phase and is re-entered for the duration of every
/// lifecycle operation; it always resolves to one of the settled phases.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

/// Navigation targets the session machine and route guard can request.
///
/// Navigation is an effect the embedding shell performs; the core only
/// signals it, via [`NavigationSink`] and
/// [`GuardOutcome::NavigateTo`](crate::guard::GuardOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Unauthorized,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::Login => "/login",
            Route::Unauthorized => "/unauthorized",
        }
    }
}

/// Callback invoked when the session machine requests a navigation.
pub type NavigationSink = Arc<dyn Fn(Route) + Send + Sync>;

/// Process-wide session state machine.
///
/// All public methods are `&self`; interior mutability via a `watch` channel
/// and an operation mutex lets multiple tasks share one handle. Lifecycle
/// operations queue on the mutex, so overlapping calls settle in order and
/// can never leave the token store and phase disagreeing.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use lucid::auth::{AuthState, MemoryTokenStore, SessionClient};
///
/// # async fn example() -> Result<(), lucid::auth::AuthError> {
/// let api = Arc::new(SessionClient::new("http://localhost:8000"));
/// let store = Arc::new(MemoryTokenStore::new());
/// let auth = AuthState::new(api, store);
///
/// auth.validate_session().await;
/// if !auth.is_authenticated() {
///     auth.login("alice", "hunter2").await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct AuthState {
    api: Arc<dyn SessionApi>,
    store: Arc<dyn TokenStore>,
    phase_tx: watch::Sender<AuthPhase>,
    phase_rx: watch::Receiver<AuthPhase>,
    op_lock: Mutex<()>,
    nav_sink: Option<NavigationSink>,
}

impl AuthState {
    /// Create a session machine over an API client and a token store.
    ///
    /// Starts in [`AuthPhase::Loading`]; call
    /// [`validate_session`](Self::validate_session) to settle it.
    pub fn new(api: Arc<dyn SessionApi>, store: Arc<dyn TokenStore>) -> Self {
        let (phase_tx, phase_rx) = watch::channel(AuthPhase::Loading);
        Self {
            api,
            store,
            phase_tx,
            phase_rx,
            op_lock: Mutex::new(()),
            nav_sink: None,
        }
    }

    /// Attach a sink that receives navigation requests (login redirect after
    /// sign-out, home redirect after sign-in).
    pub fn with_navigation_sink(mut self, sink: NavigationSink) -> Self {
        self.nav_sink = Some(sink);
        self
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> AuthPhase {
        self.phase_rx.borrow().clone()
    }

    /// Subscribe to phase changes via a [`watch::Receiver`].
    ///
    /// Callers can `.changed().await` on the returned receiver to be notified
    /// whenever the session transitions between phases.
    pub fn watch_phase(&self) -> watch::Receiver<AuthPhase> {
        self.phase_rx.clone()
    }

    /// The authenticated identity, when there is one.
    pub fn session(&self) -> Option<Session> {
        match &*self.phase_rx.borrow() {
            AuthPhase::Authenticated(session) => Some(session.clone()),
            _ => None,
        }
    }

    /// Whether a lifecycle operation is in flight (or startup validation has
    /// not run yet).
    pub fn is_loading(&self) -> bool {
        matches!(*self.phase_rx.borrow(), AuthPhase::Loading)
    }

    /// Whether the session is usable right now.
    ///
    /// True only when the phase is `Authenticated` **and** the store still
    /// holds a token, so a token cleared out from under us (another process,
    /// a wiped config dir) flips this to false immediately.
    pub fn is_authenticated(&self) -> bool {
        if !matches!(*self.phase_rx.borrow(), AuthPhase::Authenticated(_)) {
            return false;
        }
        matches!(self.store.load(), Ok(Some(_)))
    }

    /// The stored token, when there is one.
    pub fn token(&self) -> Option<Token> {
        self.store.load().ok().flatten()
    }

    /// Validate any stored token against the backend and settle the phase.
    ///
    /// With no stored token this settles to `Unauthenticated` without a
    /// network call. A rejected or unreachable backend also settles to
    /// `Unauthenticated` and clears the stale token; failures are logged,
    /// never returned.
    pub async fn validate_session(&self) {
        let _guard = self.op_lock.lock().await;
        self.set_phase(AuthPhase::Loading);

        let token = match self.store.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.set_phase(AuthPhase::Unauthenticated);
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "token store read failed during session check");
                self.set_phase(AuthPhase::Unauthenticated);
                return;
            }
        };

        match self.api.check_session(&token).await {
            Ok(session) => self.set_phase(AuthPhase::Authenticated(session)),
            Err(err) => {
                tracing::debug!(error = %err, "stored session rejected");
                if let Err(err) = self.store.clear() {
                    tracing::warn!(error = %err, "failed to clear rejected token");
                }
                self.set_phase(AuthPhase::Unauthenticated);
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token is persisted, the phase becomes `Authenticated`,
    /// and [`Route::Home`] is signalled. On failure the previous settled
    /// phase is restored untouched (a user already signed in stays signed
    /// in) and the error is returned with the server's message.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let _guard = self.op_lock.lock().await;
        let previous = self.settled_phase();
        self.set_phase(AuthPhase::Loading);

        match self.perform_login(username, password).await {
            Ok(session) => {
                self.set_phase(AuthPhase::Authenticated(session.clone()));
                self.navigate(Route::Home);
                Ok(session)
            }
            Err(err) => {
                self.set_phase(previous);
                Err(err)
            }
        }
    }

    /// Tear the session down.
    ///
    /// Best-effort server sign-out when a token exists; regardless of the
    /// outcome the token is cleared, the phase becomes `Unauthenticated`,
    /// and [`Route::Login`] is signalled. Never fails, safe to repeat.
    pub async fn logout(&self) {
        let _guard = self.op_lock.lock().await;
        self.set_phase(AuthPhase::Loading);

        match self.store.load() {
            Ok(Some(token)) => {
                if let Err(err) = self.api.sign_out(&token).await {
                    tracing::warn!(error = %err, "server sign-out failed; clearing local session anyway");
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "token store read failed during sign-out");
            }
        }

        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear token during sign-out");
        }
        self.set_phase(AuthPhase::Unauthenticated);
        self.navigate(Route::Login);
    }

    /// Change the authenticated user's password.
    ///
    /// Leaves the phase and token untouched. Fails with
    /// [`AuthError::NotAuthenticated`] when no token is stored; otherwise the
    /// backend's verdict is returned as-is.
    pub async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let token = self.store.load()?.ok_or(AuthError::NotAuthenticated)?;
        self.api
            .update_password(&token, current_password, new_password)
            .await
    }

    // -- Internal helpers --

    async fn perform_login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let signed_in = self.api.sign_in(username, password).await?;
        self.store.save(&signed_in.token)?;
        Ok(signed_in.session)
    }

    /// The phase to restore after a failed operation. `Loading` never
    /// outlives an operation, so it normalizes to `Unauthenticated`.
    fn settled_phase(&self) -> AuthPhase {
        match self.phase_rx.borrow().clone() {
            AuthPhase::Loading => AuthPhase::Unauthenticated,
            settled => settled,
        }
    }

    fn set_phase(&self, phase: AuthPhase) {
        let _ = self.phase_tx.send(phase);
    }

    fn navigate(&self, route: Route) {
        if let Some(sink) = &self.nav_sink {
            sink(route);
        }
    }
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("phase", &*self.phase_rx.borrow())
            .field("nav_sink", &self.nav_sink.as_ref().map(|_| ".."))
            .finish()
    }
}
