//! Followed-item records on top of the key-value store.
//!
//! Each followed item is stored as `hn_<id>` → decimal comment count. The key
//! is the only identity the store knows; [`derive_key`] and [`derive_id`] are
//! the single encoding between the two.

use futures::future::join_all;
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use super::SharedStore;
use crate::hn::item_url;
use crate::{HnError, Result};

/// Prefix of every followed-item key.
pub const KEY_PREFIX: &str = "hn_";

/// Store key for an item id.
pub fn derive_key(id: u64) -> String {
    format!("{KEY_PREFIX}{id}")
}

/// Item id encoded in a store key.
pub fn derive_id(key: &str) -> Result<u64> {
    let digits = key
        .strip_prefix(KEY_PREFIX)
        .ok_or_else(|| HnError::Validation(format!("store key without prefix: {key}")))?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HnError::Validation(format!("invalid store key: {key}")));
    }

    digits
        .parse()
        .map_err(|_| HnError::Validation(format!("invalid store key: {key}")))
}

/// Locally stored snapshot of a followed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FollowedItem {
    #[serde(skip)]
    pub key: String,
    pub id: u64,
    /// Reply count as of the last follow or check.
    #[serde(rename = "comments")]
    pub stored_comment_count: u64,
    /// Derived from `id`, never stored.
    pub url: String,
}

impl FollowedItem {
    /// Build a snapshot from its key and stored count.
    pub fn from_key(key: &str, stored_comment_count: u64) -> Result<Self> {
        let id = derive_id(key)?;
        Ok(Self {
            key: key.to_string(),
            id,
            stored_comment_count,
            url: item_url(id),
        })
    }
}

/// Followed-item adapter over a [`KeyValueStore`](super::KeyValueStore).
#[derive(Clone)]
pub struct FollowedStore {
    store: SharedStore,
}

impl FollowedStore {
    /// Wrap a store backend.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Load the snapshot stored under `key`.
    ///
    /// Returns `None` when the key is absent or holds an empty value. A value
    /// that is not a decimal count, or is larger than `i64::MAX`, is reported
    /// as a store error.
    pub async fn load(&self, key: &str) -> Result<Option<FollowedItem>> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let count = raw
            .parse::<u64>()
            .ok()
            .filter(|count| i64::try_from(*count).is_ok())
            .ok_or_else(|| {
                HnError::Store(format!("corrupt comment count under {key}: {raw:?}"))
            })?;

        FollowedItem::from_key(key, count).map(Some)
    }

    /// Overwrite the stored comment count.
    pub async fn save(&self, key: &str, count: u64) -> Result<()> {
        self.store.put(key, &count.to_string()).await
    }

    /// Remove a followed item.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.store.delete(key).await
    }

    /// Load every followed item.
    ///
    /// Keys that disappear between listing and loading, or whose value cannot
    /// be read, are left out of the result.
    pub async fn list_all(&self) -> Result<Vec<FollowedItem>> {
        let keys = self.store.list(KEY_PREFIX).await?;

        let loaded = join_all(keys.iter().map(|key| async move {
            match self.load(key).await {
                Ok(item) => item,
                Err(e) => {
                    debug!(key = %key, error = %e, "dropping unreadable followed item");
                    None
                }
            }
        }))
        .await;

        Ok(loaded.into_iter().flatten().collect())
    }
}
