//! Durable session persistence
//!
//! The session lives in two independent string slots: the raw token and the
//! JSON-encoded profile. Both are written and cleared together; any state where
//! only one of them can be read back is reported as "no session".

use super::credential::{Credential, Session, UserProfile};
use super::error::{AuthError, StorageError};
use crate::config::AuthConfig;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Synchronous string key-value storage
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Browser `localStorage`.
///
/// Storage may be unavailable (private browsing, sandboxed frames). Reads then
/// see nothing and writes fail with a [`StorageError`].
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    locate: fn() -> Option<web_sys::Storage>,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self {
            locate: local_storage,
        }
    }
}

impl BrowserStorage {
    /// Storage resolved through `locate` on every access
    pub const fn with_locator(locate: fn() -> Option<web_sys::Storage>) -> Self {
        Self { locate }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        (self.locate)()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = (self.locate)().ok_or_else(|| StorageError {
            key: key.to_string(),
            reason: "localStorage unavailable".to_string(),
        })?;
        storage.set_item(key, value).map_err(|err| StorageError {
            key: key.to_string(),
            reason: format!("{err:?}"),
        })
    }

    fn remove(&self, key: &str) {
        let Some(storage) = (self.locate)() else {
            tracing::debug!(key, "localStorage unavailable, nothing to remove");
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            tracing::warn!(key, error = ?err, "failed to remove storage entry");
        }
    }
}

/// In-process storage, used off the browser and in tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Persists and restores the current session
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Session store backed by the browser's `localStorage`
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage::default()))
    }

    /// Read the persisted pair, reporting corrupt data as an error
    pub fn try_load(&self) -> Result<Option<Session>, AuthError> {
        let token = self.storage.get(AuthConfig::TOKEN_KEY);
        let user = self.storage.get(AuthConfig::USER_KEY);

        match (token, user) {
            (None, None) => Ok(None),
            (Some(token), Some(user)) => {
                if token.trim().is_empty() {
                    return Err(AuthError::MalformedSession(
                        "stored token is empty".to_string(),
                    ));
                }
                let profile: UserProfile = serde_json::from_str(&user).map_err(|err| {
                    AuthError::MalformedSession(format!("stored profile is not valid: {err}"))
                })?;
                Ok(Some(Session {
                    credential: Credential::new(token),
                    profile,
                }))
            }
            (Some(_), None) => Err(AuthError::MalformedSession(
                "token stored without a profile".to_string(),
            )),
            (None, Some(_)) => Err(AuthError::MalformedSession(
                "profile stored without a token".to_string(),
            )),
        }
    }

    /// Read the persisted pair; corrupt data counts as no session
    pub fn load(&self) -> Option<Session> {
        match self.try_load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed persisted session");
                None
            }
        }
    }

    /// Persist both slots, leaving nothing behind if either write fails
    pub fn save(&self, credential: &Credential, profile: &UserProfile) {
        let profile_json = match serde_json::to_string(profile) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(error = %err, "failed to encode user profile");
                self.clear();
                return;
            }
        };

        let written = self
            .storage
            .set(AuthConfig::TOKEN_KEY, credential.token())
            .and_then(|()| self.storage.set(AuthConfig::USER_KEY, &profile_json));

        if let Err(err) = written {
            tracing::error!(error = %err, "failed to persist session");
            self.clear();
        }
    }

    /// Remove both slots
    pub fn clear(&self) {
        self.storage.remove(AuthConfig::TOKEN_KEY);
        self.storage.remove(AuthConfig::USER_KEY);
    }
}
