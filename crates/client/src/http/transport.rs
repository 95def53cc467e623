//! Single-shot HTTP transport.
//!
//! Performs exactly one network round trip per call: no retry, no auth
//! awareness. Refresh-and-retry semantics live in the API client on top.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, Method};
use thiserror::Error;
use tracing::debug;

/// Transport-level failures, one variant per failure class the API client
/// needs to distinguish.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("server responded with status {0}")]
    HttpStatus(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Thin wrapper over `reqwest` that issues one request per call.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpTransport {
    /// Start building a new transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// Convenience constructor with default configuration.
    ///
    /// # Errors
    /// Returns `TransportError::ConnectionFailed` if the underlying client
    /// cannot be constructed.
    pub fn new() -> Result<Self, TransportError> {
        Self::builder().build()
    }

    /// Issue a single request and return the response body bytes.
    ///
    /// Any non-2xx status is reported as `TransportError::HttpStatus`; the
    /// caller decides what each status means.
    ///
    /// # Errors
    /// - `ConnectionFailed` if the request never reaches the server
    /// - `Timeout` if the configured deadline elapses
    /// - `HttpStatus(code)` for non-success responses
    /// - `MalformedResponse` if the body cannot be read
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: Option<&serde_json::Value>,
    ) -> Result<Vec<u8>, TransportError> {
        debug!(%method, %url, "sending HTTP request");

        let mut request = self.client.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| self.classify(err))?;
        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| TransportError::MalformedResponse(err.to_string()))?;

        Ok(bytes.to_vec())
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else if err.is_connect() || err.is_request() {
            TransportError::ConnectionFailed(err.to_string())
        } else {
            TransportError::MalformedResponse(err.to_string())
        }
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30), user_agent: None }
    }
}

impl HttpTransportBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    /// Returns `TransportError::ConnectionFailed` if the underlying reqwest
    /// client cannot be constructed.
    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client =
            builder.build().map_err(|err| TransportError::ConnectionFailed(err.to_string()))?;

        Ok(HttpTransport { client, timeout: self.timeout })
    }
}
