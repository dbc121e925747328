//! Local filesystem key-value store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use nirvanica_core::error::{AppError, ErrorKind};
use nirvanica_core::result::AppResult;
use nirvanica_core::traits::store::KeyValueStore;

/// Local filesystem store: one file per key under a root directory.
///
/// Keys map to `<root>/<key>.json`. Key characters outside
/// `[A-Za-z0-9._-]` are replaced with `_` so a key can never escape the
/// root directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    /// Root directory for all stored entries.
    root: PathBuf,
}

impl LocalStore {
    /// Create a new local store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create store root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a key to its file path within the root.
    fn resolve(&self, key: &str) -> PathBuf {
        let clean: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{clean}.json"))
    }

    /// Root directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read key '{key}'"),
                e,
            )),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key);
        fs::write(&path, value).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write key '{key}'"),
                e,
            )
        })?;
        debug!(key, bytes = value.len(), "Wrote store entry");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to remove key '{key}'"),
                e,
            )),
        }
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.resolve(key).exists())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }
}
