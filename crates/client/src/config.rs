//! Client configuration.

use std::time::Duration;

/// Configuration shared by the transport, auth service and API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL including the API prefix (e.g.
    /// `http://localhost:8080/api/v1`). No trailing slash.
    pub base_url: String,
    /// Per-request timeout applied by the transport.
    pub timeout: Duration,
    /// Client identifier sent with registration requests.
    pub client_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/v1".to_string(),
            timeout: Duration::from_secs(30),
            client_id: "desktop".to_string(),
        }
    }
}

impl ApiConfig {
    /// Configuration pointing at the given base URL, defaults elsewhere.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }
}
