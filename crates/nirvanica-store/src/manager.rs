//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use nirvanica_core::config::store::StoreConfig;
use nirvanica_core::error::AppError;
use nirvanica_core::result::AppResult;
use nirvanica_core::traits::store::KeyValueStore;

use crate::providers::{LocalStore, MemoryStore};

/// Store manager that wraps the configured key-value provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn KeyValueStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn KeyValueStore> = match config.provider.as_str() {
            "memory" => {
                info!("Initializing in-memory store provider");
                Arc::new(MemoryStore::new())
            }
            "local" => {
                info!(root = %config.data_root, "Initializing local store provider");
                Arc::new(LocalStore::new(&config.data_root).await?)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, local"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn KeyValueStore>) -> Self {
        Self { inner: provider }
    }

    /// Get a reference to the inner provider.
    pub fn provider(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl KeyValueStore for StoreManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        self.inner.exists(key).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_provider_is_selected_from_config() {
        let config = StoreConfig {
            provider: "memory".to_string(),
            ..Default::default()
        };
        let manager = StoreManager::new(&config).await.unwrap();
        assert!(manager.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn unknown_provider_is_a_configuration_error() {
        let config = StoreConfig {
            provider: "redis".to_string(),
            ..Default::default()
        };
        let err = StoreManager::new(&config).await.unwrap_err();
        assert_eq!(err.kind, nirvanica_core::error::ErrorKind::Configuration);
    }
}
