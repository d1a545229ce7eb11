//! The session store trait with typed JSON helpers.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

/// A session-lifetime key/value store.
///
/// Implementations hold raw bytes; the typed [`get`](SessionStore::get) /
/// [`set`](SessionStore::set) helpers layer JSON serialization on top.
/// Writes are whole-value overwrites, matching the snapshot-overwrite
/// contract the cart manager relies on.
pub trait SessionStore {
    /// Get the raw bytes for a key, or `None` if absent.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Overwrite the value for a key.
    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether a key exists.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get_raw(key)?.is_some())
    }

    /// List all keys currently in the store.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Get a value, deserializing it from JSON.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Ok(Some(value)),
                Err(err) => {
                    warn!(key, error = %err, "stored value failed to deserialize");
                    Err(err.into())
                }
            },
            None => Ok(None),
        }
    }

    /// Set a value, serializing it to JSON.
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).set_raw(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }
}
