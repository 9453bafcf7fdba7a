//! Key-value persistence for followed items.
//!
//! The service only needs four operations from its backing store, captured by
//! [`KeyValueStore`]. Two backends are provided:
//! - [`MemoryStore`]: process-local, used by tests and `backend = "memory"`
//! - [`SqliteStore`]: a single `kv_entries` table through sqlx
//!
//! [`FollowedStore`] layers the followed-item key encoding on top.

pub mod followed;
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::{HnError, Result};

pub use followed::{derive_id, derive_key, FollowedItem, FollowedStore, KEY_PREFIX};
pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Shared handle to a store backend.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Minimal key-value capability. No transactions, no conditional writes.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key is not present.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// List keys starting with `prefix`, in no particular order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;
}

/// Open the backend selected in configuration.
pub async fn open(config: &StoreConfig) -> Result<SharedStore> {
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        #[cfg(feature = "sqlite")]
        "sqlite" => Ok(Arc::new(SqliteStore::open(&config.path).await?)),
        other => Err(HnError::Config(format!("unsupported store backend: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_memory_backend() {
        let config = StoreConfig {
            backend: "memory".to_string(),
            ..StoreConfig::default()
        };
        let store = open(&config).await.unwrap();
        store.put("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_open_unknown_backend() {
        let config = StoreConfig {
            backend: "etcd".to_string(),
            ..StoreConfig::default()
        };
        assert!(matches!(open(&config).await, Err(HnError::Config(_))));
    }
}
