//! Session lifecycle: login, register, refresh, logout.

use std::sync::Arc;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Method;
use thiserror::Error;
use tracing::{debug, info};

use super::types::{
    AuthResponse, CachedUser, LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest,
};
use crate::config::ApiConfig;
use crate::credentials::{CredentialKey, CredentialStore, CredentialStoreError};
use crate::endpoints::{AuthRoute, Endpoint, EndpointBuilder};
use crate::http::{HttpTransport, TransportError};

/// Auth operation failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Backend rejected the supplied credentials (400/401).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Response body did not match the expected shape.
    #[error("failed to decode auth response: {0}")]
    Decode(String),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(TransportError),

    /// Credential store rejected a read or write.
    #[error(transparent)]
    Store(#[from] CredentialStoreError),

    /// Backend returned an empty body where one was required.
    #[error("empty response body")]
    Unknown,
}

/// Login/register/refresh/logout against the backend.
///
/// On every successful auth operation the resulting tokens are persisted to
/// the credential store **before** the call returns, so a concurrent
/// authenticated request can never observe a successful login with a stale
/// store.
pub struct AuthService {
    transport: Arc<HttpTransport>,
    store: Arc<dyn CredentialStore>,
    endpoints: EndpointBuilder,
    client_id: String,
}

impl AuthService {
    #[must_use]
    pub fn new(
        config: &ApiConfig,
        transport: Arc<HttpTransport>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            transport,
            store,
            endpoints: EndpointBuilder::new(config.base_url.clone()),
            client_id: config.client_id.clone(),
        }
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    /// `InvalidCredentials` on a 400/401 from the backend; `Network`,
    /// `Decode`, `Store` or `Unknown` otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|err| AuthError::Decode(err.to_string()))?;

        let response: AuthResponse = self.post_auth(AuthRoute::Login, &body).await?;
        self.persist_session(&response).await?;

        info!(user = %response.user.username, "login successful");
        Ok(response)
    }

    /// Create a new account and authenticate in one step.
    ///
    /// # Errors
    /// `InvalidCredentials` on a 400/401 (validation failure); `Network`,
    /// `Decode`, `Store` or `Unknown` otherwise.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, AuthError> {
        let body = serde_json::to_value(RegisterRequest {
            client_id: self.client_id.clone(),
            email: email.to_string(),
            password: password.to_string(),
            username: username.to_string(),
        })
        .map_err(|err| AuthError::Decode(err.to_string()))?;

        let response: AuthResponse = self.post_auth(AuthRoute::Register, &body).await?;
        self.persist_session(&response).await?;

        info!(user = %response.user.username, "registration successful");
        Ok(response)
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// The new access token (and the new refresh token, if the backend
    /// rotated one) is persisted before this returns. A failed refresh does
    /// NOT clear the store here; the API client owns that decision.
    ///
    /// # Errors
    /// `InvalidCredentials` if the refresh token is invalid or expired
    /// (400/401); `Network`, `Decode`, `Store` or `Unknown` otherwise.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, AuthError> {
        let body = serde_json::to_value(RefreshRequest { refresh_token: refresh_token.to_string() })
            .map_err(|err| AuthError::Decode(err.to_string()))?;

        let response: RefreshResponse = self.post_auth(AuthRoute::Refresh, &body).await?;

        self.store
            .save_token_pair(&response.access_token, response.refresh_token.as_deref())
            .await?;

        debug!(rotated = response.refresh_token.is_some(), "access token refreshed");
        Ok(response)
    }

    /// Clear every stored credential. No network call.
    ///
    /// # Errors
    /// Propagates credential store failures.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.clear_session().await?;
        info!("logged out, credentials cleared");
        Ok(())
    }

    /// Whether a session exists (an access token is stored).
    pub async fn is_authenticated(&self) -> bool {
        matches!(self.store.access_token().await, Ok(Some(_)))
    }

    /// User display fields cached at login, if present.
    ///
    /// # Errors
    /// Propagates credential store failures.
    pub async fn cached_user(&self) -> Result<Option<CachedUser>, AuthError> {
        let id = self.store.get(CredentialKey::UserId).await?;
        let email = self.store.get(CredentialKey::UserEmail).await?;
        let username = self.store.get(CredentialKey::UserName).await?;

        match (id, email, username) {
            (Some(id), Some(email), Some(username)) => {
                Ok(Some(CachedUser { id, email, username }))
            }
            _ => Ok(None),
        }
    }

    async fn post_auth<T: serde::de::DeserializeOwned>(
        &self,
        route: AuthRoute,
        body: &serde_json::Value,
    ) -> Result<T, AuthError> {
        let url = self.endpoints.url(&Endpoint::Auth(route));

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "application/json".parse().map_err(
            |err: reqwest::header::InvalidHeaderValue| AuthError::Decode(err.to_string()),
        )?);

        let bytes = self
            .transport
            .send(Method::POST, &url, headers, Some(body))
            .await
            .map_err(|err| match err {
                TransportError::HttpStatus(400 | 401) => AuthError::InvalidCredentials,
                other => AuthError::Network(other),
            })?;

        if bytes.is_empty() {
            return Err(AuthError::Unknown);
        }

        serde_json::from_slice(&bytes).map_err(|err| AuthError::Decode(err.to_string()))
    }

    async fn persist_session(&self, response: &AuthResponse) -> Result<(), AuthError> {
        self.store
            .save_token_pair(&response.access_token, Some(&response.refresh_token))
            .await?;
        self.store.save(CredentialKey::UserId, &response.user.id).await?;
        self.store.save(CredentialKey::UserEmail, &response.user.email).await?;
        self.store.save(CredentialKey::UserName, &response.user.username).await?;
        Ok(())
    }
}
