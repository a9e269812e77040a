//! Shared HTTP client for the catalog endpoints.
//!
//! Every outgoing request carries the stored bearer token when one exists;
//! a missing or unreadable token is not an error, the request simply goes
//! out unauthenticated.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::session::{TokenStore, TOKEN_KEY};

/// Failures from catalog requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The service could not be reached at all.
    #[error("connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Any other transport failure.
    #[error("transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("service returned status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    fn from_request(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout
        } else if source.is_connect() {
            ApiError::Connection { source }
        } else {
            ApiError::Transport { source }
        }
    }
}

/// HTTP client with fixed transport timeouts and token attachment.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(
        request_timeout: Duration,
        connect_timeout: Duration,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .expect("failed to build http client");

        Self { http, tokens }
    }

    /// GET `url` with `query` and decode the JSON response body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut request = self.http.get(url).query(query);
        if let Some(token) = self.tokens.get(TOKEN_KEY) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ApiError::from_request)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), %body, "catalog request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { source })
    }
}
