use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::broadcast;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Narrow key/value contract behind which every backend sits.
///
/// Values are opaque strings; callers own their encoding. Writes are
/// last-write-wins per key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// List every stored key starting with `prefix`, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be enumerated.
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .range(prefix.to_owned()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }
}

// ─── Change notifications ──────────────────────────────────────────────────────

/// A key was written through an observed store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub key: String,
}

/// Broadcast feed of store writes, shared by every window of the app.
#[derive(Clone, Debug)]
pub struct ChangeFeed {
    sender: broadcast::Sender<StoreChange>,
}

impl ChangeFeed {
    const CAPACITY: usize = 64;

    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(Self::CAPACITY);
        Self { sender }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.sender.subscribe()
    }

    /// Publish a change. Having no subscribers is not an error.
    pub fn publish(&self, key: &str) {
        let receivers = self
            .sender
            .send(StoreChange {
                key: key.to_owned(),
            })
            .unwrap_or(0);
        tracing::trace!(key, receivers, "store change published");
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a backend and publishes a `StoreChange` after every successful write.
#[derive(Clone)]
pub struct ObservedStore {
    inner: Arc<dyn KeyValueStore>,
    feed: ChangeFeed,
}

impl ObservedStore {
    #[must_use]
    pub fn new(inner: Arc<dyn KeyValueStore>, feed: ChangeFeed) -> Self {
        Self { inner, feed }
    }
}

#[async_trait]
impl KeyValueStore for ObservedStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value).await?;
        self.feed.publish(key);
        Ok(())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        self.inner.keys_with_prefix(prefix).await
    }
}

/// The app's key/value store plus its change feed, for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
    pub changes: ChangeFeed,
}

impl Storage {
    /// Wrap `backend` so writes are published on a fresh change feed.
    #[must_use]
    pub fn observed(backend: Arc<dyn KeyValueStore>) -> Self {
        let changes = ChangeFeed::new();
        let kv: Arc<dyn KeyValueStore> = Arc::new(ObservedStore::new(backend, changes.clone()));
        Self { kv, changes }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::observed(Arc::new(InMemoryStore::new()))
    }
}
