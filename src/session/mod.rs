//! Authenticated session state and token persistence.

mod file_store;

pub use file_store::FileTokenStore;

use std::fmt;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::api::{AuthStrategy, Credentials};

/// Storage key under which the bearer token lives.
pub const TOKEN_KEY: &str = "token";

/// Failures from token store writes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key '{key}'")]
    InvalidKey { key: String },

    #[error("failed to access '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Opaque scoped key-value persistence for session data.
///
/// Read failures are swallowed: `get` answers `None` and the caller simply
/// proceeds unauthenticated.
pub trait TokenStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Holder for the in-memory token that never leaks it through `Debug` or
/// `Display`.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureString(\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022})")
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}")
    }
}

/// What the presentation layer needs to know about the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    /// A login request is in flight.
    pub loading: bool,
    /// Blocking alert text from the last failed login, until dismissed.
    pub alert: Option<String>,
}

#[derive(Default)]
struct SessionInner {
    token: Option<SecureString>,
    loading: bool,
    alert: Option<String>,
}

/// Cheaply cloneable session handle; clones share one state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
    strategy: AuthStrategy,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(strategy: AuthStrategy, store: Arc<dyn TokenStore>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner::default())),
            strategy,
            http: reqwest::Client::new(),
            store,
        }
    }

    /// Adopt a previously persisted token, if one exists. Called once
    /// before the UI starts, so the first frame already knows whether the
    /// user is signed in.
    pub fn load_persisted(&self) {
        if let Some(token) = self.store.get(TOKEN_KEY) {
            tracing::debug!("adopting persisted session token");
            self.inner.write().expect("session lock poisoned").token =
                Some(SecureString::new(token));
        }
    }

    pub fn strategy(&self) -> &AuthStrategy {
        &self.strategy
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.read().expect("session lock poisoned");
        SessionSnapshot {
            authenticated: inner.token.is_some(),
            loading: inner.loading,
            alert: inner.alert.clone(),
        }
    }

    /// Run the login call and fold the outcome into the session.
    ///
    /// Failures become a blocking alert; the held token only changes on
    /// success. A failed persist write is logged but does not undo the
    /// login, the session just will not survive a restart.
    pub async fn login(&self, credentials: Credentials) {
        {
            let mut inner = self.inner.write().expect("session lock poisoned");
            inner.loading = true;
            inner.alert = None;
        }

        let result = self.strategy.login(&self.http, &credentials).await;

        let (token, alert) = match result {
            Ok(token) => {
                if let Err(err) = self.store.set(TOKEN_KEY, &token) {
                    tracing::error!(error = %err, "failed to persist session token");
                }
                (Some(SecureString::new(token)), None)
            }
            Err(err) => (
                None,
                Some(format!("Login failed: {}", err.user_message())),
            ),
        };

        let mut inner = self.inner.write().expect("session lock poisoned");
        if let Some(token) = token {
            inner.token = Some(token);
        }
        inner.alert = alert;
        inner.loading = false;
    }

    /// Drop the token from memory and the store.
    pub fn logout(&self) {
        if let Err(err) = self.store.remove(TOKEN_KEY) {
            tracing::warn!(error = %err, "failed to remove persisted token");
        }
        self.inner.write().expect("session lock poisoned").token = None;
    }

    pub fn dismiss_alert(&self) {
        self.inner.write().expect("session lock poisoned").alert = None;
    }
}
