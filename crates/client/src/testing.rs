//! Test doubles for the client's external collaborators.
//!
//! Kept in the library (not behind `cfg(test)`) so integration tests and
//! downstream crates can reuse them.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::credentials::{CredentialKey, CredentialStore, CredentialStoreError};

/// In-memory credential store. Avoids platform keychain prompts and persists
/// data only for the lifetime of the instance.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: Mutex<HashMap<&'static str, String>>,
    fail_writes: Mutex<bool>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail, for exercising store-error paths.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }

    /// Number of credentials currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Whether the store holds no credentials at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, CredentialStoreError> {
        Ok(self.values.lock().get(key.as_str()).cloned())
    }

    async fn save(&self, key: CredentialKey, value: &str) -> Result<(), CredentialStoreError> {
        if *self.fail_writes.lock() {
            return Err(CredentialStoreError::AccessFailed("simulated write failure".to_string()));
        }
        self.values.lock().insert(key.as_str(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: CredentialKey) -> Result<(), CredentialStoreError> {
        self.values.lock().remove(key.as_str());
        Ok(())
    }
}
