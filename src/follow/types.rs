//! Types produced by the follow service.

use serde::Serialize;
use utoipa::ToSchema;

use crate::hn::ItemType;
use crate::{HnError, Result};

/// Item types that can be formatted as a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotifiableType {
    Story,
    Comment,
}

impl TryFrom<Option<ItemType>> for NotifiableType {
    type Error = HnError;

    /// Polls, poll options and jobs can be followed and listed but are never
    /// formatted as check notifications. A missing type is treated the same.
    fn try_from(item_type: Option<ItemType>) -> Result<Self> {
        match item_type {
            Some(ItemType::Story) => Ok(NotifiableType::Story),
            Some(ItemType::Comment) => Ok(NotifiableType::Comment),
            Some(other) => Err(HnError::UnsupportedItemType(other.to_string())),
            None => Err(HnError::UnsupportedItemType("missing type".to_string())),
        }
    }
}

/// Result of comparing a followed item with its live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: u64,
    /// Current reply count minus the stored one.
    pub new_comment_count: i64,
    pub url: String,
    pub has_notification: bool,
    pub item_type: NotifiableType,
    /// Only set for stories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Outcome of a follow request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowOutcome {
    /// The item was already stored; nothing was fetched or written.
    AlreadyFollowing { id: u64 },
    /// The item is now stored with its current reply count.
    Followed { id: u64, comments: u64, url: String },
}

/// Outcome of an unfollow request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfollowOutcome {
    NotFollowing { id: u64 },
    Unfollowed { id: u64 },
}

/// Result of checking every followed item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// One record per item that could be fetched and formatted.
    pub notifications: Vec<NotificationRecord>,
    /// Items left out because their fetch or reconciliation failed.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifiable_type_from_item_type() {
        assert_eq!(
            NotifiableType::try_from(Some(ItemType::Story)).unwrap(),
            NotifiableType::Story
        );
        assert_eq!(
            NotifiableType::try_from(Some(ItemType::Comment)).unwrap(),
            NotifiableType::Comment
        );

        for unsupported in [
            Some(ItemType::Poll),
            Some(ItemType::Pollopt),
            Some(ItemType::Job),
            Some(ItemType::Unknown),
            None,
        ] {
            assert!(matches!(
                NotifiableType::try_from(unsupported),
                Err(HnError::UnsupportedItemType(_))
            ));
        }
    }

    #[test]
    fn test_notification_record_serialization() {
        let record = NotificationRecord {
            id: 1,
            new_comment_count: 5,
            url: "https://news.ycombinator.com/item?id=1".to_string(),
            has_notification: true,
            item_type: NotifiableType::Story,
            title: Some("A Great Story".to_string()),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "newCommentCount": 5,
                "url": "https://news.ycombinator.com/item?id=1",
                "hasNotification": true,
                "itemType": "story",
                "title": "A Great Story"
            })
        );
    }

    #[test]
    fn test_notification_record_omits_missing_title() {
        let record = NotificationRecord {
            id: 2,
            new_comment_count: 0,
            url: "https://news.ycombinator.com/item?id=2".to_string(),
            has_notification: false,
            item_type: NotifiableType::Comment,
            title: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("title").is_none());
        assert_eq!(json["itemType"], "comment");
    }
}
