use lucid::auth::{Role, Token};
use lucid::error::LucidError;
use lucid::users::{NewUser, UserRecord, UsersClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn admin_token() -> Token {
    Token::new("admin-token")
}

fn carol() -> NewUser {
    NewUser {
        username: "carol".to_string(),
        email: "carol@example.org".to_string(),
        role: Role::Viewer,
        password: "hunter2".to_string(),
    }
}

#[tokio::test]
async fn create_user_posts_signup_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(header("authorization", "Bearer admin-token"))
        .and(body_json(json!({
            "username": "carol",
            "email": "carol@example.org",
            "role": "viewer",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "username": "carol",
            "email": "carol@example.org",
            "role": "viewer",
            "is_active": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = UsersClient::new(server.uri());
    let created = client.create_user(&admin_token(), &carol()).await.unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(created.username, "carol");
    server.verify().await;
}

#[tokio::test]
async fn list_users_parses_the_account_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "username": "root",
                "email": "root@example.org",
                "role": "admin",
                "is_active": true,
                "hashed_password": "$2b$12$abcdef"
            },
            {
                "id": 2,
                "username": "alice",
                "email": "alice@example.org",
                "role": "viewer",
                "is_active": false
            }
        ])))
        .mount(&server)
        .await;

    let client = UsersClient::new(server.uri());
    let users = client.list_users(&admin_token()).await.unwrap();

    assert_eq!(
        users,
        vec![
            UserRecord {
                id: 1,
                username: "root".to_string(),
                email: "root@example.org".to_string(),
                role: Role::Admin,
                is_active: true,
            },
            UserRecord {
                id: 2,
                username: "alice".to_string(),
                email: "alice@example.org".to_string(),
                role: Role::Viewer,
                is_active: false,
            },
        ]
    );
}

#[tokio::test]
async fn update_user_puts_the_replacement_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users/7"))
        .and(header("authorization", "Bearer admin-token"))
        .and(body_json(json!({
            "username": "carol",
            "email": "carol@example.org",
            "role": "viewer",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "username": "carol",
            "email": "carol@example.org",
            "role": "viewer",
            "is_active": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = UsersClient::new(server.uri());
    let updated = client.update_user(&admin_token(), 7, &carol()).await.unwrap();

    assert_eq!(updated.id, 7);
    server.verify().await;
}

#[tokio::test]
async fn delete_user_succeeds_on_ok() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/7"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = UsersClient::new(server.uri());
    client.delete_user(&admin_token(), 7).await.unwrap();
    server.verify().await;
}

#[tokio::test]
async fn non_admin_caller_gets_the_server_verdict() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "detail": "The user doesn't have enough privileges" })),
        )
        .mount(&server)
        .await;

    let client = UsersClient::new(server.uri());
    let err = client.list_users(&Token::new("viewer-token")).await.unwrap_err();

    match err {
        LucidError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "The user doesn't have enough privileges");
        }
        other => panic!("expected an api error, got {other:?}"),
    }
}

#[tokio::test]
async fn deleting_a_missing_user_maps_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "User not found" })))
        .mount(&server)
        .await;

    let client = UsersClient::new(server.uri());
    let err = client.delete_user(&admin_token(), 99).await.unwrap_err();

    match err {
        LucidError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "User not found");
        }
        other => panic!("expected an api error, got {other:?}"),
    }
}

#[tokio::test]
async fn bodyless_errors_fall_back_to_the_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = UsersClient::new(server.uri());
    let err = client.list_users(&admin_token()).await.unwrap_err();

    match err {
        LucidError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected an api error, got {other:?}"),
    }
}
