//! Authentication strategies and the login call.
//!
//! The strategy is selected once at startup from configuration; nothing
//! else in the app branches on which service is behind the login screen.

use serde_json::{json, Value};
use thiserror::Error;

use crate::config::{AuthConfig, ConfigError};

/// Login form values. `identity` is a username for the mock strategy and
/// an email for the remote one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identity: String,
    pub password: String,
}

/// Failures from the login call.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authentication service could not be reached.
    #[error("login request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with an error status.
    #[error("login rejected with status {status}")]
    Rejected {
        status: u16,
        /// Best-available message extracted from the response body.
        message: Option<String>,
    },

    /// A success response that carried no usable token.
    #[error("authentication succeeded but no token was returned")]
    MissingToken,
}

impl AuthError {
    /// Text for the blocking login alert: the server's own words when it
    /// sent any, otherwise this error's rendering.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            other => {
                let text = other.to_string();
                if text.is_empty() {
                    "Unknown error".to_string()
                } else {
                    text
                }
            }
        }
    }
}

/// Which login service to talk to and with what payload shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStrategy {
    /// Local mock server: `POST {base}/auth` with username + password.
    Mock { base_url: String },
    /// Hosted demo service: `POST {base}/login` with email + password.
    Remote { base_url: String },
}

impl AuthStrategy {
    /// Build the strategy selected by `[auth]` in the config file.
    pub fn from_config(auth: &AuthConfig) -> Result<Self, ConfigError> {
        match auth.mode.as_str() {
            "mock" => Ok(AuthStrategy::Mock {
                base_url: trim_base(&auth.mock_url),
            }),
            "remote" => Ok(AuthStrategy::Remote {
                base_url: trim_base(&auth.remote_url),
            }),
            other => Err(ConfigError::ValidationError {
                message: format!("auth.mode must be \"mock\" or \"remote\", got \"{other}\""),
            }),
        }
    }

    /// Short label for the login screen.
    pub fn label(&self) -> &'static str {
        match self {
            AuthStrategy::Mock { .. } => "local mock login",
            AuthStrategy::Remote { .. } => "remote login",
        }
    }

    /// What the identity field holds for this strategy.
    pub fn identity_label(&self) -> &'static str {
        match self {
            AuthStrategy::Mock { .. } => "Username",
            AuthStrategy::Remote { .. } => "Email",
        }
    }

    /// Demo values used to prefill the login form.
    pub fn prefill(&self) -> Credentials {
        match self {
            AuthStrategy::Mock { .. } => Credentials {
                identity: "kminchelle".to_string(),
                password: "0lelplR".to_string(),
            },
            AuthStrategy::Remote { .. } => Credentials {
                identity: "eve.holt@reqres.in".to_string(),
                password: "cityslicka".to_string(),
            },
        }
    }

    fn login_url(&self) -> String {
        match self {
            AuthStrategy::Mock { base_url } => format!("{base_url}/auth"),
            AuthStrategy::Remote { base_url } => format!("{base_url}/login"),
        }
    }

    fn payload(&self, credentials: &Credentials) -> Value {
        match self {
            AuthStrategy::Mock { .. } => json!({
                "username": credentials.identity,
                "password": credentials.password,
            }),
            AuthStrategy::Remote { .. } => json!({
                "email": credentials.identity,
                "password": credentials.password,
            }),
        }
    }

    /// Run the login call. The caller's client is deliberately bare: the
    /// login request never carries a bearer token.
    pub async fn login(
        &self,
        http: &reqwest::Client,
        credentials: &Credentials,
    ) -> Result<String, AuthError> {
        let url = self.login_url();
        let response = http
            .post(&url)
            .json(&self.payload(credentials))
            .send()
            .await
            .map_err(|source| AuthError::Transport { source })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if !status.is_success() {
            tracing::error!(%url, status = status.as_u16(), body = %text, "login rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: extract_server_message(&body),
            });
        }

        match body.get("token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => {
                tracing::error!(%url, body = %text, "login response carried no token");
                Err(AuthError::MissingToken)
            }
        }
    }
}

fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Pull the most specific human-readable message out of an auth error
/// body: `message`, then `error`, then `errors`, then the whole body.
fn extract_server_message(body: &Value) -> Option<String> {
    if body.is_null() {
        return None;
    }
    for key in ["message", "error"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    if let Some(errors) = body.get("errors") {
        if !errors.is_null() {
            return Some(errors.to_string());
        }
    }
    Some(body.to_string())
}
