//! Durable key-value bridge over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wishlist store keeps one serialized string under a fixed key. This
//! module owns the web-sys glue and the fallback rules so the store never
//! sees a storage failure: reads fall back to a caller-supplied default and
//! writes are logged and dropped.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed write is never retried and the
//! cached value keeps its last persisted content, so the next successful
//! write simply overwrites whatever was lost. Other tabs are not notified.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Error raised by a [`KeyValueStorage`] backend.
///
/// These never cross the bridge boundary as `Err`; [`PersistedValue`]
/// recovers from all of them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No durable storage in this execution context (SSR, native tests,
    /// storage disabled by the browser).
    #[error("durable storage is unavailable")]
    Unavailable,
    /// The backend rejected a read.
    #[error("storage read failed: {0}")]
    Read(String),
    /// The backend rejected a write (quota exceeded, private mode).
    #[error("storage write failed: {0}")]
    Write(String),
    /// The value could not be serialized before writing.
    #[error("failed to serialize value: {0}")]
    Serialize(String),
}

/// A string-valued durable key-value store.
pub trait KeyValueStorage: Send + Sync {
    /// Fetch the value stored at `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached or read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call.
///
/// Without the `hydrate` feature there is no browser, so every call reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Read(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local storage backend.
///
/// Clones share the same entries, which makes it a stand-in for a single
/// browser profile. Reads and writes can be forced to fail to exercise the
/// fallback paths.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with `value`.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.lock().entries.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Raw stored value, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.lock();
        if inner.fail_reads {
            return Err(StorageError::Read("injected read failure".to_owned()));
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Result of a best-effort write through [`PersistedValue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The value reached durable storage and is now the cached value.
    Persisted,
    /// The write failed and was dropped; the cached value is unchanged.
    Dropped(StorageError),
}

impl WriteOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }
}

/// One durable string cell: a key, its backend, and the last-known value.
pub struct PersistedValue {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    value: String,
}

impl fmt::Debug for PersistedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl PersistedValue {
    /// Read `key` from `storage`, falling back to `default` when the read
    /// fails or yields a missing or empty value.
    pub fn open(storage: Arc<dyn KeyValueStorage>, key: &str, default: &str) -> Self {
        let mut cell = Self::pending(storage, key, default);
        cell.reload(default);
        cell
    }

    /// A cell holding `default` that has not read `key` yet.
    pub fn pending(storage: Arc<dyn KeyValueStorage>, key: &str, default: &str) -> Self {
        Self {
            storage,
            key: key.to_owned(),
            value: default.to_owned(),
        }
    }

    /// Re-read `key`, with the same fallback rules as [`PersistedValue::open`].
    pub fn reload(&mut self, default: &str) {
        self.value = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => default.to_owned(),
            Err(e) => {
                log::debug!("local_storage: read of {:?} failed, using default: {e}", self.key);
                default.to_owned()
            }
        };
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The last value read or successfully written.
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Write `value` to durable storage.
    pub fn set(&mut self, value: impl Into<String>) -> WriteOutcome {
        let value = value.into();
        match self.storage.set_item(&self.key, &value) {
            Ok(()) => {
                self.value = value;
                WriteOutcome::Persisted
            }
            Err(e) => {
                log::warn!("local_storage: dropping write to {:?}: {e}", self.key);
                WriteOutcome::Dropped(e)
            }
        }
    }

    /// Compute a new value from the last-known one and write it.
    pub fn update(&mut self, f: impl FnOnce(&str) -> String) -> WriteOutcome {
        let next = f(&self.value);
        self.set(next)
    }
}
