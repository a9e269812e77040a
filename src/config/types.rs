use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Transport and paging defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Request timeout in seconds (default: 5).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Products requested per listing page (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Defaults {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.into())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds.into())
    }
}

/// Remote product catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL for the catalog API.
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,
}

/// Authentication strategy selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Which login service to use: "mock" or "remote".
    #[serde(default = "default_auth_mode")]
    pub mode: String,
    /// Base URL of the local mock auth server.
    #[serde(default = "default_mock_url")]
    pub mock_url: String,
    /// Base URL of the hosted demo auth service.
    #[serde(default = "default_remote_url")]
    pub remote_url: String,
}

fn default_timeout() -> u32 {
    5
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> u32 {
    10
}

fn default_catalog_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_auth_mode() -> String {
    "mock".to_string()
}

fn default_mock_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_remote_url() -> String {
    "https://reqres.in/api".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            catalog: CatalogConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            page_size: default_page_size(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_base_url(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: default_auth_mode(),
            mock_url: default_mock_url(),
            remote_url: default_remote_url(),
        }
    }
}
