//! Credential store contract and the platform keychain implementation.
//!
//! The store is the only persistent shared state in the client. Tokens are
//! written by the auth service (login/register/refresh) and the API client
//! (forced logout after a failed refresh), never by domain services.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Logical keys the client is allowed to persist. Closed set; nothing else
/// goes into the secure store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKey {
    AccessToken,
    RefreshToken,
    UserId,
    UserEmail,
    UserName,
}

impl CredentialKey {
    /// Stable storage identifier for the key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AccessToken => "auth.access_token",
            Self::RefreshToken => "auth.refresh_token",
            Self::UserId => "user.id",
            Self::UserEmail => "user.email",
            Self::UserName => "user.name",
        }
    }

    /// All keys, in the order they are cleared on logout.
    pub const ALL: [Self; 5] =
        [Self::AccessToken, Self::RefreshToken, Self::UserId, Self::UserEmail, Self::UserName];
}

/// Credential store failures.
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    /// Underlying secure storage rejected the operation.
    #[error("credential storage access failed: {0}")]
    AccessFailed(String),
}

/// Opaque secure key-value store for session credentials.
///
/// Implementations must be safe to call from many concurrent requests.
/// `get` returns `None` for absent keys; `delete` is idempotent.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, CredentialStoreError>;

    async fn save(&self, key: CredentialKey, value: &str) -> Result<(), CredentialStoreError>;

    async fn delete(&self, key: CredentialKey) -> Result<(), CredentialStoreError>;

    /// Current access token, if a session exists.
    async fn access_token(&self) -> Result<Option<String>, CredentialStoreError> {
        self.get(CredentialKey::AccessToken).await
    }

    /// Current refresh token, if a session exists.
    async fn refresh_token(&self) -> Result<Option<String>, CredentialStoreError> {
        self.get(CredentialKey::RefreshToken).await
    }

    /// Persist a new token pair. A `None` refresh token leaves the stored
    /// one untouched (backends that do not rotate refresh tokens).
    async fn save_token_pair(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
    ) -> Result<(), CredentialStoreError> {
        self.save(CredentialKey::AccessToken, access_token).await?;
        if let Some(refresh_token) = refresh_token {
            self.save(CredentialKey::RefreshToken, refresh_token).await?;
        }
        Ok(())
    }

    /// Remove every stored credential (logout, or irrecoverable refresh
    /// failure).
    async fn clear_session(&self) -> Result<(), CredentialStoreError> {
        for key in CredentialKey::ALL {
            self.delete(key).await?;
        }
        Ok(())
    }
}

/// Platform keychain store backed by the `keyring` crate (macOS Keychain,
/// Windows Credential Manager, Linux Secret Service).
pub struct KeyringCredentialStore {
    service_name: String,
}

impl KeyringCredentialStore {
    /// Create a store scoped to a keychain service name
    /// (e.g. `"Sweeply.auth"`).
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    fn entry(&self, key: CredentialKey) -> Result<keyring::Entry, CredentialStoreError> {
        keyring::Entry::new(&self.service_name, key.as_str())
            .map_err(|err| CredentialStoreError::AccessFailed(err.to_string()))
    }
}

#[async_trait]
impl CredentialStore for KeyringCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, CredentialStoreError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(CredentialStoreError::AccessFailed(format!(
                "failed to read {}: {err}",
                key.as_str()
            ))),
        }
    }

    async fn save(&self, key: CredentialKey, value: &str) -> Result<(), CredentialStoreError> {
        debug!(service = %self.service_name, key = key.as_str(), "storing credential");
        self.entry(key)?.set_password(value).map_err(|err| {
            CredentialStoreError::AccessFailed(format!("failed to store {}: {err}", key.as_str()))
        })
    }

    async fn delete(&self, key: CredentialKey) -> Result<(), CredentialStoreError> {
        debug!(service = %self.service_name, key = key.as_str(), "deleting credential");
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(CredentialStoreError::AccessFailed(format!(
                "failed to delete {}: {err}",
                key.as_str()
            ))),
        }
    }
}
