//! Follow service: follow, unfollow, list and check followed items.
//!
//! This is the only component that writes followed-item records. A record is
//! created by [`FollowService::follow`], raised by [`FollowService::reconcile`]
//! when a check sees more replies than stored, and removed by
//! [`FollowService::unfollow`].

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::follow::types::{
    CheckReport, FollowOutcome, NotifiableType, NotificationRecord, UnfollowOutcome,
};
use crate::hn::{item_url, ItemSource, RemoteItem};
use crate::store::{derive_key, FollowedItem, FollowedStore, SharedStore};
use crate::Result;

fn saturating_i64(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Service for follow operations.
///
/// The store and the item source are injected so the reconciliation rules can
/// be exercised without network or disk.
#[derive(Clone)]
pub struct FollowService {
    followed: FollowedStore,
    items: Arc<dyn ItemSource>,
}

impl FollowService {
    /// Create a service over a store backend and an item source.
    pub fn new(store: SharedStore, items: Arc<dyn ItemSource>) -> Self {
        Self {
            followed: FollowedStore::new(store),
            items,
        }
    }

    /// Start following an item.
    ///
    /// Following an item that is already stored reports
    /// [`FollowOutcome::AlreadyFollowing`] without contacting HN. Fetch errors
    /// are returned unchanged.
    pub async fn follow(&self, id: u64) -> Result<FollowOutcome> {
        let key = derive_key(id);

        if self.followed.load(&key).await?.is_some() {
            debug!(id, "already following");
            return Ok(FollowOutcome::AlreadyFollowing { id });
        }

        let remote = self.items.fetch_item(id).await?;
        let comments = remote.reply_count();

        self.followed.save(&key, comments).await?;
        info!(id, comments, "followed HN item");

        Ok(FollowOutcome::Followed {
            id,
            comments,
            url: item_url(id),
        })
    }

    /// Stop following an item.
    ///
    /// A failed delete is returned as an error since the record may or may
    /// not still exist.
    pub async fn unfollow(&self, id: u64) -> Result<UnfollowOutcome> {
        let key = derive_key(id);

        if self.followed.load(&key).await?.is_none() {
            return Ok(UnfollowOutcome::NotFollowing { id });
        }

        self.followed.delete(&key).await?;
        info!(id, "unfollowed HN item");

        Ok(UnfollowOutcome::Unfollowed { id })
    }

    /// Stored snapshot of one followed item.
    pub async fn get(&self, id: u64) -> Result<Option<FollowedItem>> {
        self.followed.load(&derive_key(id)).await
    }

    /// Stored snapshots of all followed items, in no particular order.
    pub async fn list(&self) -> Result<Vec<FollowedItem>> {
        self.followed.list_all().await
    }

    /// Compare a live item with its stored snapshot.
    ///
    /// The stored count is raised to the live count before the record is
    /// built, and only when the live count is higher.
    pub async fn reconcile(
        &self,
        remote: &RemoteItem,
        followed: &FollowedItem,
    ) -> Result<NotificationRecord> {
        let item_type = NotifiableType::try_from(remote.item_type)?;

        let current = remote.reply_count();
        let stored = followed.stored_comment_count;

        if stored < current {
            self.followed.save(&followed.key, current).await?;
        }

        Ok(NotificationRecord {
            id: followed.id,
            new_comment_count: saturating_i64(current).saturating_sub(saturating_i64(stored)),
            url: item_url(followed.id),
            has_notification: stored < current,
            item_type,
            title: match item_type {
                NotifiableType::Story => remote.title.clone(),
                NotifiableType::Comment => None,
            },
        })
    }

    /// Fetch and reconcile one followed item.
    async fn check_one(&self, followed: &FollowedItem) -> Result<NotificationRecord> {
        let remote = self.items.fetch_item(followed.id).await?;
        self.reconcile(&remote, followed).await
    }

    /// Check every followed item for new replies.
    ///
    /// Items are checked concurrently. An item whose fetch or reconciliation
    /// fails is logged and left out; the others are unaffected.
    pub async fn check_all(&self) -> Result<CheckReport> {
        let items = self.followed.list_all().await?;
        debug!(count = items.len(), "checking followed items");

        let results = join_all(items.iter().map(|item| self.check_one(item))).await;

        let mut report = CheckReport::default();
        for (item, result) in items.iter().zip(results) {
            match result {
                Ok(record) => report.notifications.push(record),
                Err(e) => {
                    warn!(key = %item.key, error = %e, "error processing followed item");
                    report.skipped += 1;
                }
            }
        }

        info!(
            checked = report.notifications.len(),
            skipped = report.skipped,
            notifying = report
                .notifications
                .iter()
                .filter(|r| r.has_notification)
                .count(),
            "check complete"
        );

        Ok(report)
    }
}
