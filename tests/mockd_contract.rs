//! Wire-level contract tests for the mock authentication server.

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use vitrine::api::{AuthStrategy, Credentials};
use vitrine::mockd::{MockAuthServer, UserTable, UsersError};
use vitrine::session::{FileTokenStore, Session};

async fn start_server(users: UserTable) -> SocketAddr {
    let mut server = MockAuthServer::new(users);
    let addr = server.try_bind(0).await.unwrap();
    tokio::spawn(server.run());
    tokio::time::sleep(Duration::from_millis(10)).await;
    addr
}

async fn post_auth(addr: SocketAddr, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{}/auth", addr))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_username_login_returns_the_demo_token() {
    let addr = start_server(UserTable::defaults()).await;

    let resp = post_auth(
        addr,
        json!({ "username": "kminchelle", "password": "0lelplR" }),
    )
    .await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["token"], "hVLrzuEqWoHqZQZWnNfyxv");
}

#[tokio::test]
async fn test_email_login_returns_the_demo_token() {
    let addr = start_server(UserTable::defaults()).await;

    let resp = post_auth(
        addr,
        json!({ "email": "eve.holt@reqres.in", "password": "cityslicka" }),
    )
    .await;

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["token"], "QpwL5tke4Pnpja7X4");
}

#[tokio::test]
async fn test_wrong_password_is_rejected_with_a_request_id() {
    let addr = start_server(UserTable::defaults()).await;

    let resp = post_auth(
        addr,
        json!({ "username": "kminchelle", "password": "wrong" }),
    )
    .await;

    assert_eq!(resp.status(), 400);
    assert!(resp.headers().get("x-request-id").is_some());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_absent_or_empty_credentials_are_missing_not_invalid() {
    let addr = start_server(UserTable::defaults()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/auth", addr);

    // No body at all.
    let resp = client.post(&url).send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Missing credentials");

    // Empty-string fields count as absent.
    let resp = post_auth(addr, json!({ "username": "", "password": "" })).await;
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Missing credentials");

    // A body that is not JSON degrades the same way.
    let resp = client.post(&url).body("not json").send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Missing credentials");
}

#[tokio::test]
async fn test_custom_user_table_replaces_the_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.toml");
    std::fs::write(
        &path,
        "[[users]]\nusername = \"staff\"\npassword = \"hunter2\"\ntoken = \"tok-staff\"\n",
    )
    .unwrap();

    let table = UserTable::load(&path).unwrap();
    let addr = start_server(table).await;

    let resp = post_auth(addr, json!({ "username": "staff", "password": "hunter2" })).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["token"], "tok-staff");

    // The built-in demo user is gone.
    let resp = post_auth(
        addr,
        json!({ "username": "kminchelle", "password": "0lelplR" }),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_load_reports_each_failure_kind() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("nowhere.toml");
    assert!(matches!(
        UserTable::load(&missing),
        Err(UsersError::ReadError { .. })
    ));

    let garbled = dir.path().join("garbled.toml");
    std::fs::write(&garbled, "users = [ not toml").unwrap();
    assert!(matches!(
        UserTable::load(&garbled),
        Err(UsersError::ParseError { .. })
    ));

    let empty = dir.path().join("empty.toml");
    std::fs::write(&empty, "").unwrap();
    assert!(matches!(
        UserTable::load(&empty),
        Err(UsersError::ValidationError { .. })
    ));
}

#[tokio::test]
async fn test_client_session_logs_in_against_mockd() {
    let addr = start_server(UserTable::defaults()).await;
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileTokenStore::new(dir.path()));
    let session = Session::new(
        AuthStrategy::Mock {
            base_url: format!("http://{}", addr),
        },
        store,
    );

    session
        .login(Credentials {
            identity: "kminchelle".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    let snapshot = session.snapshot();
    assert!(!snapshot.authenticated);
    assert_eq!(
        snapshot.alert.as_deref(),
        Some("Login failed: Invalid credentials")
    );

    session
        .login(Credentials {
            identity: "kminchelle".to_string(),
            password: "0lelplR".to_string(),
        })
        .await;
    assert!(session.snapshot().authenticated);
}
