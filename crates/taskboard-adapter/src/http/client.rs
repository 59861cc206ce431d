/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client plus request/response helpers
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{Operation, Result, TaskboardError};

/// Base URL of the taskboard API
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Overall request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the taskboard API
#[derive(Debug, Clone)]
pub struct TaskboardClient {
    http_client: Client,
    base_url: Url,
}

impl TaskboardClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| TaskboardError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(TaskboardError::Config(format!(
                "base url cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL for `segments` below the base path. Segments are
    /// percent-encoded, so opaque ids are safe to pass through.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TaskboardError::Config(format!("base url cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send and require a 2xx status; the body is left unread.
    pub(crate) async fn send(
        &self,
        operation: Operation,
        builder: RequestBuilder,
    ) -> Result<Response> {
        let request = builder
            .build()
            .map_err(|e| TaskboardError::transport(operation, e))?;
        debug!(%operation, method = %request.method(), url = %request.url(), "sending request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| TaskboardError::transport(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%operation, %status, "request rejected");
            return Err(TaskboardError::Status { operation, status });
        }
        Ok(response)
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(operation, builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| TaskboardError::transport(operation, e))
    }
}
