//! Companion mock authentication server.
//!
//! One route, `POST /auth`, backed by a linear credential search over an
//! in-memory user table. Accepts either `{username, password}` or
//! `{email, password}`, answering `{"token": ...}` on a match and a 400
//! with a `message` field otherwise. The default table carries the two
//! demo users the client prefills; a TOML file can replace it.

use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;
use uuid::Uuid;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors from loading a user table file.
#[derive(Debug, Error)]
pub enum UsersError {
    #[error("Failed to read users file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse users file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Users file validation failed: {message}")]
    ValidationError { message: String },
}

/// One credential entry. A user is keyed by username or by email; both is
/// allowed, neither is a validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct MockUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
    pub token: String,
}

/// The in-memory credential table.
#[derive(Debug, Clone, Deserialize)]
pub struct UserTable {
    #[serde(default)]
    users: Vec<MockUser>,
}

impl UserTable {
    /// The built-in demo users: one username-keyed, one email-keyed,
    /// matching the credentials the client's login form prefills.
    pub fn defaults() -> Self {
        Self {
            users: vec![
                MockUser {
                    username: Some("kminchelle".to_string()),
                    email: None,
                    password: "0lelplR".to_string(),
                    token: "hVLrzuEqWoHqZQZWnNfyxv".to_string(),
                },
                MockUser {
                    username: None,
                    email: Some("eve.holt@reqres.in".to_string()),
                    password: "cityslicka".to_string(),
                    token: "QpwL5tke4Pnpja7X4".to_string(),
                },
            ],
        }
    }

    /// Load and validate a table from a TOML file of `[[users]]` entries.
    pub fn load(path: &Path) -> Result<Self, UsersError> {
        let content = std::fs::read_to_string(path).map_err(|source| UsersError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let table: UserTable =
            toml::from_str(&content).map_err(|source| UsersError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), UsersError> {
        if self.users.is_empty() {
            return Err(UsersError::ValidationError {
                message: "user table must not be empty".to_string(),
            });
        }

        for (index, user) in self.users.iter().enumerate() {
            let keyed = user.username.as_deref().is_some_and(|u| !u.is_empty())
                || user.email.as_deref().is_some_and(|e| !e.is_empty());
            if !keyed {
                return Err(UsersError::ValidationError {
                    message: format!("user #{index} needs a username or an email"),
                });
            }
            if user.password.is_empty() || user.token.is_empty() {
                return Err(UsersError::ValidationError {
                    message: format!("user #{index} needs a non-empty password and token"),
                });
            }
        }

        Ok(())
    }

    fn find_by_username(&self, username: &str, password: &str) -> Option<&MockUser> {
        self.users
            .iter()
            .find(|u| u.username.as_deref() == Some(username) && u.password == password)
    }

    fn find_by_email(&self, email: &str, password: &str) -> Option<&MockUser> {
        self.users
            .iter()
            .find(|u| u.email.as_deref() == Some(email) && u.password == password)
    }

    /// Startup log lines listing every demo credential in the table.
    pub fn startup_lines(&self) -> Vec<String> {
        self.users
            .iter()
            .map(|user| match (&user.username, &user.email) {
                (Some(username), _) => {
                    format!("Demo login: username={}, password={}", username, user.password)
                }
                (None, Some(email)) => {
                    format!("Demo login: email={}, password={}", email, user.password)
                }
                (None, None) => "Demo login: (unkeyed user)".to_string(),
            })
            .collect()
    }
}

/// Whatever the client sent; all fields optional so an empty or malformed
/// body degrades to the missing-credentials answer instead of a rejection.
#[derive(Debug, Default, Deserialize)]
struct AuthRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum AuthReply {
    Token(String),
    InvalidCredentials,
    MissingCredentials,
}

/// The credential check: username+password first, then email+password.
/// Empty strings count as absent, so `{"username": ""}` is missing
/// credentials, not invalid ones.
fn check_auth(
    users: &UserTable,
    username: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
) -> AuthReply {
    let Some(password) = password.filter(|p| !p.is_empty()) else {
        return AuthReply::MissingCredentials;
    };

    if let Some(username) = username.filter(|u| !u.is_empty()) {
        return match users.find_by_username(username, password) {
            Some(user) => AuthReply::Token(user.token.clone()),
            None => AuthReply::InvalidCredentials,
        };
    }

    if let Some(email) = email.filter(|e| !e.is_empty()) {
        return match users.find_by_email(email, password) {
            Some(user) => AuthReply::Token(user.token.clone()),
            None => AuthReply::InvalidCredentials,
        };
    }

    AuthReply::MissingCredentials
}

async fn handle_auth(State(users): State<Arc<UserTable>>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let request: AuthRequest = serde_json::from_slice(&body).unwrap_or_default();

    let reply = check_auth(
        &users,
        request.username.as_deref(),
        request.email.as_deref(),
        request.password.as_deref(),
    );

    match reply {
        AuthReply::Token(token) => {
            tracing::info!(%request_id, "login accepted");
            (StatusCode::OK, Json(json!({ "token": token }))).into_response()
        }
        AuthReply::InvalidCredentials => rejected(request_id, "Invalid credentials"),
        AuthReply::MissingCredentials => rejected(request_id, "Missing credentials"),
    }
}

fn rejected(request_id: Uuid, message: &str) -> Response {
    tracing::warn!(%request_id, %message, "login rejected");
    (
        StatusCode::BAD_REQUEST,
        [("x-request-id", request_id.to_string())],
        Json(json!({ "message": message })),
    )
        .into_response()
}

/// The mock authentication server.
///
/// `try_bind` claims the port and keeps the listener alive so nothing can
/// steal it before `run` starts serving.
pub struct MockAuthServer {
    pub addr: SocketAddr,
    listener: Option<TcpListener>,
    users: Arc<UserTable>,
}

impl MockAuthServer {
    pub fn new(users: UserTable) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            users: Arc::new(users),
        }
    }

    /// Bind to `127.0.0.1:{port}` (0 picks a free port) and report the
    /// actual address.
    pub async fn try_bind(&mut self, port: u16) -> io::Result<SocketAddr> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port))).await?;
        self.addr = listener.local_addr()?;
        self.listener = Some(listener);
        tracing::info!("Mock auth server bound to {}", self.addr);
        Ok(self.addr)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/auth", post(handle_auth))
            .with_state(Arc::clone(&self.users))
    }

    pub fn startup_lines(&self) -> Vec<String> {
        self.users.startup_lines()
    }

    /// Serve until SIGINT/SIGTERM.
    ///
    /// Consumes self to take ownership of the pre-bound listener; call
    /// `try_bind` first.
    pub async fn run(self) -> io::Result<()> {
        let app = self.router();
        let listener = self
            .listener
            .ok_or_else(|| io::Error::other("try_bind() must be called before run()"))?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Shutting down gracefully");
        Ok(())
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(err) => {
                tracing::error!(error = %err, "failed to register SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_path_returns_token() {
        let users = UserTable::defaults();
        let reply = check_auth(&users, Some("kminchelle"), None, Some("0lelplR"));
        assert_eq!(reply, AuthReply::Token("hVLrzuEqWoHqZQZWnNfyxv".to_string()));
    }

    #[test]
    fn test_email_path_returns_token() {
        let users = UserTable::defaults();
        let reply = check_auth(&users, None, Some("eve.holt@reqres.in"), Some("cityslicka"));
        assert_eq!(reply, AuthReply::Token("QpwL5tke4Pnpja7X4".to_string()));
    }

    #[test]
    fn test_username_wins_over_email_when_both_present() {
        let users = UserTable::defaults();
        // Wrong password for the username user, even though the email pair
        // would match: the username branch answers first.
        let reply = check_auth(
            &users,
            Some("kminchelle"),
            Some("eve.holt@reqres.in"),
            Some("cityslicka"),
        );
        assert_eq!(reply, AuthReply::InvalidCredentials);
    }

    #[test]
    fn test_wrong_password_is_invalid() {
        let users = UserTable::defaults();
        let reply = check_auth(&users, Some("kminchelle"), None, Some("nope"));
        assert_eq!(reply, AuthReply::InvalidCredentials);
    }

    #[test]
    fn test_unknown_user_is_invalid() {
        let users = UserTable::defaults();
        let reply = check_auth(&users, None, Some("nobody@example.com"), Some("pw"));
        assert_eq!(reply, AuthReply::InvalidCredentials);
    }

    #[test]
    fn test_absent_or_empty_fields_are_missing() {
        let users = UserTable::defaults();
        assert_eq!(check_auth(&users, None, None, None), AuthReply::MissingCredentials);
        assert_eq!(
            check_auth(&users, Some(""), Some(""), Some("pw")),
            AuthReply::MissingCredentials
        );
        assert_eq!(
            check_auth(&users, Some("kminchelle"), None, Some("")),
            AuthReply::MissingCredentials
        );
        assert_eq!(
            check_auth(&users, Some("kminchelle"), None, None),
            AuthReply::MissingCredentials
        );
    }

    #[test]
    fn test_table_parses_from_toml() {
        let table: UserTable = toml::from_str(
            r#"
[[users]]
username = "demo"
password = "secret"
token = "tok-1"

[[users]]
email = "demo@example.com"
password = "secret"
token = "tok-2"
"#,
        )
        .unwrap();
        table.validate().unwrap();

        assert_eq!(table.users.len(), 2);
        assert_eq!(
            check_auth(&table, Some("demo"), None, Some("secret")),
            AuthReply::Token("tok-1".to_string())
        );
    }

    #[test]
    fn test_validation_rejects_bad_tables() {
        let empty: UserTable = toml::from_str("").unwrap();
        assert!(matches!(
            empty.validate(),
            Err(UsersError::ValidationError { .. })
        ));

        let unkeyed: UserTable = toml::from_str(
            "[[users]]\npassword = \"pw\"\ntoken = \"tok\"\n",
        )
        .unwrap();
        assert!(matches!(
            unkeyed.validate(),
            Err(UsersError::ValidationError { .. })
        ));

        let no_token: UserTable = toml::from_str(
            "[[users]]\nusername = \"demo\"\npassword = \"pw\"\ntoken = \"\"\n",
        )
        .unwrap();
        assert!(matches!(
            no_token.validate(),
            Err(UsersError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_startup_lines_cover_both_key_kinds() {
        let lines = UserTable::defaults().startup_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("username=kminchelle"));
        assert!(lines[1].contains("email=eve.holt@reqres.in"));
    }
}
