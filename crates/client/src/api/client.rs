//! Authenticated request orchestration with single-flight token refresh.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::errors::ApiError;
use crate::auth::{AuthError, AuthService};
use crate::config::ApiConfig;
use crate::credentials::CredentialStore;
use crate::endpoints::{Endpoint, EndpointBuilder};
use crate::http::{HttpTransport, TransportError};

/// Authenticated API client.
///
/// Wraps the transport and the credential store to provide
/// refresh-on-401-then-retry-once semantics. One instance is shared across
/// the whole process; the refresh gate only holds if every authenticated
/// request goes through the same instance.
///
/// Refresh gate: a `tokio::sync::Mutex` around a generation counter. Each
/// request snapshots the generation before it reads its token. On a 401 the
/// caller locks the gate; if the generation still matches its snapshot it
/// won the race and performs the one refresh (bumping the generation),
/// otherwise another caller already resolved a refresh and this caller
/// adopts that outcome by re-reading the store. Either way the original
/// request is replayed at most once, and a 401 on the replay is surfaced as
/// `Unauthorized` rather than triggering another refresh.
pub struct ApiClient {
    transport: Arc<HttpTransport>,
    store: Arc<dyn CredentialStore>,
    auth: Arc<AuthService>,
    endpoints: EndpointBuilder,
    refresh_gate: Mutex<u64>,
}

impl ApiClient {
    /// Build a client (and its auth service) over a credential store.
    ///
    /// # Errors
    /// Returns `ApiError::Network` if the HTTP transport cannot be built.
    pub fn new(config: &ApiConfig, store: Arc<dyn CredentialStore>) -> Result<Self, ApiError> {
        let transport = Arc::new(
            HttpTransport::builder().timeout(config.timeout).build().map_err(ApiError::Network)?,
        );
        let auth = Arc::new(AuthService::new(config, Arc::clone(&transport), Arc::clone(&store)));

        Ok(Self {
            transport,
            store,
            auth,
            endpoints: EndpointBuilder::new(config.base_url.clone()),
            refresh_gate: Mutex::new(0),
        })
    }

    /// The auth service sharing this client's transport and store. Explicit
    /// auth actions (login, register, logout) go through here.
    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    /// Issue a bearer-authenticated request, refreshing the access token
    /// behind the gate if the backend answers 401.
    ///
    /// # Errors
    /// - `Unauthorized` if no token is stored (no network call is made), if
    ///   the refresh fails (the store is cleared first), or if the replayed
    ///   request is rejected again
    /// - `Store` if the credential store itself fails; the session is left
    ///   in place
    /// - `Client`/`Server`/`Network` for non-auth failures, unretried
    pub async fn authenticated_request(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&serde_json::Value>,
    ) -> Result<Vec<u8>, ApiError> {
        let generation = *self.refresh_gate.lock().await;
        let Some(token) = self.store.access_token().await? else {
            debug!(%endpoint, "no access token stored, refusing to send");
            return Err(ApiError::Unauthorized);
        };

        let url = self.endpoints.url(endpoint);

        match self.transport.send(method.clone(), &url, bearer_headers(&token)?, body).await {
            Ok(bytes) => Ok(bytes),
            Err(TransportError::HttpStatus(401)) => {
                debug!(%endpoint, "access token rejected, resolving refresh");
                let token = self.resolve_refresh(generation).await?;

                // Replay exactly once; a second 401 means the fresh token is
                // not accepted either, and that is terminal for this call.
                match self.transport.send(method, &url, bearer_headers(&token)?, body).await {
                    Ok(bytes) => Ok(bytes),
                    Err(TransportError::HttpStatus(401)) => Err(ApiError::Unauthorized),
                    Err(other) => Err(ApiError::from_transport(other)),
                }
            }
            Err(other) => Err(ApiError::from_transport(other)),
        }
    }

    /// `GET` an endpoint and decode its JSON body.
    ///
    /// # Errors
    /// See [`Self::authenticated_request`]; additionally `Decode` if the
    /// body does not match `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let bytes = self.authenticated_request(Method::GET, endpoint, None).await?;
        decode(&bytes)
    }

    /// `POST` a JSON body and decode the response.
    ///
    /// # Errors
    /// See [`Self::authenticated_request`]; additionally `Decode`.
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: &T,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))?;
        let bytes = self.authenticated_request(Method::POST, endpoint, Some(&body)).await?;
        decode(&bytes)
    }

    /// `POST` with no body and decode the response.
    ///
    /// # Errors
    /// See [`Self::authenticated_request`]; additionally `Decode`.
    pub async fn post_empty<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<R, ApiError> {
        let bytes = self.authenticated_request(Method::POST, endpoint, None).await?;
        decode(&bytes)
    }

    /// `PATCH` a JSON body and decode the response.
    ///
    /// # Errors
    /// See [`Self::authenticated_request`]; additionally `Decode`.
    pub async fn patch<T: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: &T,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))?;
        let bytes = self.authenticated_request(Method::PATCH, endpoint, Some(&body)).await?;
        decode(&bytes)
    }

    /// `DELETE` an endpoint, discarding any response body.
    ///
    /// # Errors
    /// See [`Self::authenticated_request`].
    pub async fn delete(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
        self.authenticated_request(Method::DELETE, endpoint, None).await?;
        Ok(())
    }

    /// Resolve the refresh for a caller that observed a 401.
    ///
    /// Exactly one caller per contention window performs the network
    /// refresh; everyone else blocks on the gate and adopts the winner's
    /// outcome. Returns the access token to replay with.
    async fn resolve_refresh(&self, observed_generation: u64) -> Result<String, ApiError> {
        let mut generation = self.refresh_gate.lock().await;

        if *generation != observed_generation {
            // A refresh completed while this caller was waiting. Its outcome
            // is whatever the store now holds: a token to replay with, or
            // nothing because the refresh failed and the session was cleared.
            return self.store.access_token().await?.ok_or(ApiError::Unauthorized);
        }

        *generation = generation.wrapping_add(1);

        let Some(refresh_token) = self.store.refresh_token().await? else {
            warn!("401 with no refresh token stored, clearing session");
            self.store.clear_session().await?;
            return Err(ApiError::Unauthorized);
        };

        match self.auth.refresh(&refresh_token).await {
            Ok(response) => {
                debug!("token refresh succeeded");
                Ok(response.access_token)
            }
            Err(AuthError::Store(err)) => {
                // A storage fault is not an expired session. Keep the
                // credentials and surface the fault as-is.
                warn!(error = %err, "credential store rejected refreshed tokens");
                Err(ApiError::Store(err))
            }
            Err(err) => {
                // Terminal for this session: force logout so every waiting
                // and subsequent call fails fast with Unauthorized.
                warn!(error = %err, "token refresh failed, clearing session");
                self.store.clear_session().await?;
                Err(ApiError::Unauthorized)
            }
        }
    }
}

fn bearer_headers(token: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let value = HeaderValue::try_from(format!("Bearer {token}"))
        .map_err(|_| ApiError::Unauthorized)?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    // 204-style empty bodies decode as JSON null so callers can ask for ()
    // or Option<T>.
    let result = if bytes.is_empty() {
        serde_json::from_slice(b"null")
    } else {
        serde_json::from_slice(bytes)
    };
    result.map_err(|err| ApiError::Decode(err.to_string()))
}
