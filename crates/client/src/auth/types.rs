//! Request and response shapes for the auth endpoints.

use serde::{Deserialize, Serialize};
use sweeply_domain::UserView;

/// Body of `POST auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub client_id: String,
    pub email: String,
    pub password: String,
    pub username: String,
}

/// Body of `POST auth/refresh`. The refresh token travels in the body, not
/// as a bearer header.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response of `POST auth/login` and `POST auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserView,
}

/// Response of `POST auth/refresh`.
///
/// `refresh_token` is optional: the backend may or may not rotate it.
/// Whatever it returns is what gets persisted; the old refresh token must
/// not be assumed valid after a successful refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub expires_in: i64,
}

/// User display fields cached in the credential store at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedUser {
    pub id: String,
    pub email: String,
    pub username: String,
}
