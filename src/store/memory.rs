//! In-memory key-value store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeyValueStore;
use crate::Result;

/// Key-value store held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_overwrite() {
        let store = MemoryStore::new();
        assert_eq!(store.get("hn_1").await.unwrap(), None);

        store.put("hn_1", "3").await.unwrap();
        assert_eq!(store.get("hn_1").await.unwrap(), Some("3".to_string()));

        store.put("hn_1", "8").await.unwrap();
        assert_eq!(store.get("hn_1").await.unwrap(), Some("8".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        store.put("hn_1", "3").await.unwrap();
        store.delete("hn_1").await.unwrap();
        assert!(store.is_empty().await);

        // Deleting again is a no-op.
        store.delete("hn_1").await.unwrap();
    }

    #[tokio::test]
    async fn test_list_by_prefix() {
        let store = MemoryStore::new();
        store.put("hn_1", "0").await.unwrap();
        store.put("hn_22", "0").await.unwrap();
        store.put("other_3", "0").await.unwrap();
        store.put("hm_4", "0").await.unwrap();

        let mut keys = store.list("hn_").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["hn_1", "hn_22"]);

        assert_eq!(store.list("").await.unwrap().len(), 4);
        assert!(store.list("zz").await.unwrap().is_empty());
    }
}
