//! Types for Hacker News API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Base URL of the public item page.
pub const HN_ITEM_URL: &str = "https://news.ycombinator.com/item";

/// Canonical web URL of an item.
pub fn item_url(id: u64) -> String {
    format!("{HN_ITEM_URL}?id={id}")
}

/// Kind of an HN item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Story,
    Comment,
    Poll,
    Pollopt,
    Job,
    /// Any type string the API may add later.
    #[serde(other)]
    Unknown,
}

impl ItemType {
    /// Convert to the wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Story => "story",
            ItemType::Comment => "comment",
            ItemType::Poll => "poll",
            ItemType::Pollopt => "pollopt",
            ItemType::Job => "job",
            ItemType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item as returned by the Firebase API (`/v0/item/<id>.json`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoteItem {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub item_type: Option<ItemType>,
    #[serde(default)]
    pub title: Option<String>,
    /// Direct reply ids. Omitted by the API when there are none.
    #[serde(rename = "kids", default)]
    pub child_ids: Option<Vec<u64>>,
    #[serde(default)]
    pub by: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Unix timestamp.
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub descendants: Option<u64>,
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub parts: Option<Vec<u64>>,
    #[serde(default)]
    pub poll: Option<u64>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub dead: Option<bool>,
    #[serde(default)]
    pub deleted: Option<bool>,
}

impl RemoteItem {
    /// Number of direct replies; an absent list counts as zero.
    pub fn reply_count(&self) -> u64 {
        self.child_ids.as_ref().map_or(0, |kids| kids.len() as u64)
    }
}

/// An item with its nested reply tree, as returned by the Algolia API
/// (`/api/v1/items/<id>`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThreadItem {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub item_type: Option<ItemType>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub story_id: Option<u64>,
    #[serde(default)]
    pub parent_id: Option<u64>,
    /// Unix timestamp.
    #[serde(default)]
    pub created_at_i: Option<i64>,
    #[serde(default)]
    pub children: Vec<ThreadItem>,
}

/// Descriptive summary of an item and its discussion.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: u64,
    pub title: String,
    pub item_type: Option<ItemType>,
    /// Replies at every depth.
    pub comments: u64,
    /// Direct replies only.
    pub replies: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url() {
        assert_eq!(item_url(12345), "https://news.ycombinator.com/item?id=12345");
    }

    #[test]
    fn test_deserialize_story() {
        let json = r#"{
            "by": "dhouston",
            "descendants": 71,
            "id": 8863,
            "kids": [8952, 9224, 8917],
            "score": 111,
            "time": 1175714200,
            "title": "My YC app: Dropbox - Throw away your USB drive",
            "type": "story",
            "url": "http://www.getdropbox.com/u/2/screencast.html"
        }"#;

        let item: RemoteItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 8863);
        assert_eq!(item.item_type, Some(ItemType::Story));
        assert_eq!(item.reply_count(), 3);
        assert_eq!(item.descendants, Some(71));
        assert_eq!(item.by.as_deref(), Some("dhouston"));
    }

    #[test]
    fn test_deserialize_without_kids_or_type() {
        let item: RemoteItem = serde_json::from_str(r#"{"id": 104, "descendants": 10}"#).unwrap();
        assert_eq!(item.item_type, None);
        assert_eq!(item.child_ids, None);
        assert_eq!(item.reply_count(), 0);
    }

    #[test]
    fn test_deserialize_unknown_type() {
        let item: RemoteItem = serde_json::from_str(r#"{"id": 1, "type": "event"}"#).unwrap();
        assert_eq!(item.item_type, Some(ItemType::Unknown));
    }

    #[test]
    fn test_deserialize_null_payload() {
        let item: Option<RemoteItem> = serde_json::from_str("null").unwrap();
        assert!(item.is_none());
    }

    #[test]
    fn test_item_type_display() {
        assert_eq!(ItemType::Pollopt.to_string(), "pollopt");
        assert_eq!(
            serde_json::to_string(&ItemType::Comment).unwrap(),
            "\"comment\""
        );
    }

    #[test]
    fn test_deserialize_thread() {
        let json = r#"{
            "author": "pg",
            "children": [
                {"id": 15, "type": "comment", "children": [], "parent_id": 1, "story_id": 1, "title": null}
            ],
            "created_at_i": 1160418111,
            "id": 1,
            "options": [],
            "parent_id": null,
            "points": 57,
            "story_id": 1,
            "title": "Y Combinator",
            "type": "story",
            "url": "http://ycombinator.com"
        }"#;

        let thread: ThreadItem = serde_json::from_str(json).unwrap();
        assert_eq!(thread.id, 1);
        assert_eq!(thread.children.len(), 1);
        assert_eq!(thread.children[0].item_type, Some(ItemType::Comment));
        assert_eq!(thread.children[0].title, None);
        assert_eq!(thread.created_at_i, Some(1160418111));
    }
}
