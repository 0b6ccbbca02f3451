//! Key-value persistence seam and the JSON snapshot repository built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build backs [`KeyValueStore`] with `window.localStorage`; tests
//! and server rendering use [`MemoryStorage`]. Stores never touch a
//! `KeyValueStore` directly for their collections: they go through a
//! [`Repository`], which owns the key and the serialization format.
//!
//! TRADE-OFFS
//! ==========
//! `save_all` rewrites the whole snapshot on every call. Collections are a few
//! dozen records at most, so a full overwrite keeps the stored value and the
//! in-memory value identical without any append log.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Storage key holding the serialized inbox.
pub const MESSAGES_KEY: &str = "messages";
/// Storage key holding the serialized payment ledger.
pub const PAYMENTS_KEY: &str = "payments";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Read `key`, returning `None` when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process storage. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| Error::Storage("memory storage lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Load/save access to one persisted collection.
pub trait Repository<T> {
    /// Read the stored collection. A missing snapshot is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the store fails or the snapshot is not
    /// valid JSON for `T`.
    fn load(&self) -> Result<Vec<T>>;

    /// Replace the stored collection with `items`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if serialization or the write fails.
    fn save_all(&self, items: &[T]) -> Result<()>;
}

/// Repository that stores a collection as one JSON array under a fixed key.
#[derive(Debug)]
pub struct JsonRepository<S, T> {
    store: S,
    key: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<S: Clone, T> Clone for JsonRepository<S, T> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), key: self.key, _item: PhantomData }
    }
}

impl<S, T> JsonRepository<S, T> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key, _item: PhantomData }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<S, T> Repository<T> for JsonRepository<S, T>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>> {
        let Some(raw) = self.store.get(self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| Error::Storage(format!("decode {}: {e}", self.key)))
    }

    fn save_all(&self, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items).map_err(|e| Error::Storage(format!("encode {}: {e}", self.key)))?;
        self.store.set(self.key, &raw)?;
        tracing::trace!(key = self.key, count = items.len(), "snapshot written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
