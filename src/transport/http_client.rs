//! HTTP transport to the MOEX ISS API.
//!
//! ISS is a public read-only API: no authentication, no sessions. The
//! transport is a thin typed GET that builds the URL against the
//! configured base, applies the configured timeout, maps non-success
//! statuses, and decodes JSON.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Typed GET access to the ISS API.
#[async_trait]
pub trait IssHttpClient: Send + Sync {
    /// Makes a GET request to the ISS API and decodes the JSON response
    ///
    /// # Arguments
    /// * `path` - Path relative to the configured base URL (absolute URLs pass through)
    /// * `query` - Query parameters, URL-encoded by the transport
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - If the request or decoding fails
    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, AppError>
    where
        T: DeserializeOwned + Send;
}

/// `IssHttpClient` backed by a shared `reqwest::Client`.
pub struct IssHttpClientImpl {
    config: Arc<Config>,
    http_client: HttpClient,
}

impl IssHttpClientImpl {
    /// Creates a new transport with the configured timeout and user agent
    ///
    /// # Arguments
    /// * `config` - Gateway configuration carrying the ISS base URL and timeout
    ///
    /// # Returns
    /// * `Ok(IssHttpClientImpl)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.iss.timeout))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl IssHttpClient for IssHttpClientImpl {
    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, AppError>
    where
        T: DeserializeOwned + Send,
    {
        // Build URL
        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.iss.base_url.trim_end_matches('/'), path)
        };

        debug!("GET {}", url);

        let mut request = self.http_client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response.json().await?)
    }
}
