//! Error taxonomy surfaced by the API client.
//!
//! Callers never see raw 401s: the client resolves the refresh/retry
//! decision internally and reports only the final outcome.

use thiserror::Error;

use crate::credentials::CredentialStoreError;
use crate::http::TransportError;

/// Final outcome of an authenticated API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No token, an invalid token, or an irrecoverably expired session.
    /// After a failed refresh the credential store has already been cleared.
    #[error("unauthorized")]
    Unauthorized,

    /// Backend rejected the request (4xx other than 401).
    #[error("client error: status {0}")]
    Client(u16),

    /// Backend failed (5xx).
    #[error("server error: status {0}")]
    Server(u16),

    /// Transport-level failure (connection, timeout, unreadable body).
    #[error("network error: {0}")]
    Network(TransportError),

    /// Response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Credential store rejected a read or write.
    #[error(transparent)]
    Store(#[from] CredentialStoreError),
}

impl ApiError {
    /// Classify a transport failure. 401 is intentionally absent here: the
    /// API client intercepts it before this mapping applies.
    pub(crate) fn from_transport(err: TransportError) -> Self {
        match err {
            TransportError::HttpStatus(code @ 400..=499) => Self::Client(code),
            TransportError::HttpStatus(code @ 500..=599) => Self::Server(code),
            other => Self::Network(other),
        }
    }
}
