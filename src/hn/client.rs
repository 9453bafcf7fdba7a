//! HTTP client for the Hacker News Firebase and Algolia APIs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::HnConfig;
use crate::error::{HnError, Result};
use crate::hn::types::{RemoteItem, ThreadItem};

/// Source of live items.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch a single item by id. One round trip, no retries, no caching.
    async fn fetch_item(&self, id: u64) -> Result<RemoteItem>;
}

/// Source of items with their full reply tree.
#[async_trait]
pub trait ThreadSource: Send + Sync {
    /// Fetch an item and its nested children by id.
    async fn fetch_thread(&self, id: u64) -> Result<ThreadItem>;
}

/// Client for both HN APIs.
pub struct HnClient {
    client: Client,
    item_api_url: String,
    algolia_api_url: String,
}

impl HnClient {
    /// Create a client from configuration.
    pub fn new(config: &HnConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| HnError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            item_api_url: config.item_api_url.trim_end_matches('/').to_string(),
            algolia_api_url: config.algolia_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Firebase URL for an item.
    pub fn item_endpoint(&self, id: u64) -> String {
        format!("{}/{}.json", self.item_api_url, id)
    }

    /// Algolia URL for an item.
    pub fn thread_endpoint(&self, id: u64) -> String {
        format!("{}/{}", self.algolia_api_url, id)
    }

    /// GET a JSON document, mapping every failure before decoding to
    /// [`HnError::Transport`] and a `null` body to [`HnError::InvalidItem`].
    async fn get_json<T: DeserializeOwned>(&self, url: &str, id: u64) -> Result<T> {
        debug!(id, url, "fetching HN item");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HnError::Transport(format!("Error getting HN item {}: {}", id, e)))?;

        if !response.status().is_success() {
            return Err(HnError::Transport(format!(
                "Error getting HN item {}: HTTP {}",
                id,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HnError::Transport(format!("Error getting HN item {}: {}", id, e)))?;

        decode_item(&bytes, id)
    }
}

/// Decode an item body. `null` means the item does not exist.
///
/// Reply trees nest one object level per reply, so the recursion limit is
/// lifted and the stack grows on demand instead.
fn decode_item<T: DeserializeOwned>(bytes: &[u8], id: u64) -> Result<T> {
    let invalid = |e: serde_json::Error| {
        HnError::Transport(format!("Error getting HN item {}: invalid payload: {}", id, e))
    };

    let mut json = serde_json::Deserializer::from_slice(bytes);
    json.disable_recursion_limit();

    let parsed = Option::<T>::deserialize(serde_stacker::Deserializer::new(&mut json))
        .map_err(invalid)?;
    json.end().map_err(invalid)?;

    parsed.ok_or(HnError::InvalidItem(id))
}

#[async_trait]
impl ItemSource for HnClient {
    async fn fetch_item(&self, id: u64) -> Result<RemoteItem> {
        self.get_json(&self.item_endpoint(id), id).await
    }
}

#[async_trait]
impl ThreadSource for HnClient {
    async fn fetch_thread(&self, id: u64) -> Result<ThreadItem> {
        self.get_json(&self.thread_endpoint(id), id).await
    }
}
