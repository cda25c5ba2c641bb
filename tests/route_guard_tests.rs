mod support;

use std::sync::Arc;

use lucid::auth::{AuthState, MemoryTokenStore, Role, Route, SessionClient, Token, TokenStore};
use lucid::guard::{GuardOutcome, RouteGuard};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{admin_session, session_body, viewer_session};

fn auth_for(server: &MockServer, store: Arc<MemoryTokenStore>) -> AuthState {
    AuthState::new(Arc::new(SessionClient::new(server.uri())), store)
}

async fn mount_session(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn guard_reports_loading_before_validation() {
    let server = MockServer::start().await;
    let auth = auth_for(&server, Arc::new(MemoryTokenStore::new()));

    let outcome = RouteGuard::new().evaluate(&auth);
    assert_eq!(outcome, GuardOutcome::Loading);
}

#[tokio::test]
async fn guard_admits_authenticated_session() {
    let server = MockServer::start().await;
    let alice = viewer_session("alice");
    mount_session(&server, session_body(&alice)).await;

    let store = Arc::new(MemoryTokenStore::new());
    store.save(&Token::new("stored-token")).unwrap();
    let auth = auth_for(&server, store);
    auth.validate_session().await;

    let outcome = RouteGuard::new().evaluate(&auth);
    assert_eq!(outcome, GuardOutcome::Allow(alice));
}

#[tokio::test]
async fn guard_redirects_unauthenticated_to_login() {
    let server = MockServer::start().await;
    let auth = auth_for(&server, Arc::new(MemoryTokenStore::new()));
    auth.validate_session().await;

    let outcome = RouteGuard::new().evaluate(&auth);
    assert_eq!(outcome, GuardOutcome::NavigateTo(Route::Login));
}

#[tokio::test]
async fn admin_guard_blocks_viewer_session() {
    let server = MockServer::start().await;
    mount_session(&server, session_body(&viewer_session("alice"))).await;

    let store = Arc::new(MemoryTokenStore::new());
    store.save(&Token::new("stored-token")).unwrap();
    let auth = auth_for(&server, store);
    auth.validate_session().await;

    let outcome = RouteGuard::new()
        .with_required_role(Role::Admin)
        .evaluate(&auth);
    assert_eq!(outcome, GuardOutcome::NavigateTo(Route::Unauthorized));
}

#[tokio::test]
async fn admin_guard_admits_admin_session() {
    let server = MockServer::start().await;
    let root = admin_session("root");
    mount_session(&server, session_body(&root)).await;

    let store = Arc::new(MemoryTokenStore::new());
    store.save(&Token::new("stored-token")).unwrap();
    let auth = auth_for(&server, store);
    auth.validate_session().await;

    let outcome = RouteGuard::new()
        .with_required_role(Role::Admin)
        .evaluate(&auth);
    assert_eq!(outcome, GuardOutcome::Allow(root));
}

#[tokio::test]
async fn token_cleared_out_of_band_redirects_to_login() {
    let server = MockServer::start().await;
    mount_session(&server, session_body(&viewer_session("alice"))).await;

    let store = Arc::new(MemoryTokenStore::new());
    store.save(&Token::new("stored-token")).unwrap();
    let auth = auth_for(&server, store.clone());
    auth.validate_session().await;
    assert_eq!(
        RouteGuard::new().evaluate(&auth),
        GuardOutcome::Allow(viewer_session("alice"))
    );

    // Another handle wipes the token; the guard must not render with the
    // now-dead session still held in the phase.
    store.clear().unwrap();

    let outcome = RouteGuard::new().evaluate(&auth);
    assert_eq!(outcome, GuardOutcome::NavigateTo(Route::Login));
}

#[tokio::test]
async fn wait_settled_resolves_once_validation_completes() {
    let server = MockServer::start().await;
    let alice = viewer_session("alice");
    mount_session(&server, session_body(&alice)).await;

    let store = Arc::new(MemoryTokenStore::new());
    store.save(&Token::new("stored-token")).unwrap();
    let auth = Arc::new(auth_for(&server, store));

    let waiter = {
        let auth = auth.clone();
        tokio::spawn(async move {
            RouteGuard::new()
                .with_required_role(Role::Viewer)
                .wait_settled(&auth)
                .await
        })
    };

    auth.validate_session().await;

    let outcome = waiter.await.unwrap();
    assert_eq!(outcome, GuardOutcome::Allow(alice));
}
