//! In-memory key-value store.

use async_trait::async_trait;
use dashmap::DashMap;

use nirvanica_core::result::AppResult;
use nirvanica_core::traits::store::KeyValueStore;

/// In-process key-value store backed by a concurrent map.
///
/// Contents live exactly as long as the process; used by tests and by
/// deployments that do not want records to outlive a session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// The underlying map.
    entries: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
