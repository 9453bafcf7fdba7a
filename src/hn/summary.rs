//! Item summaries built from the Algolia reply tree.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;
use crate::hn::client::ThreadSource;
use crate::hn::types::{item_url, ItemSummary, ItemType, ThreadItem};

/// Count replies at every depth below `item`.
pub fn count_all_children(item: &ThreadItem) -> u64 {
    let mut stack = vec![item];
    let mut count = 0;

    while let Some(current) = stack.pop() {
        count += current.children.len() as u64;
        stack.extend(current.children.iter());
    }

    count
}

/// Summarize an item and its discussion.
///
/// A comment is titled after the story it belongs to. If that story cannot be
/// fetched the title is left empty instead of failing the summary.
pub async fn summarize(source: &dyn ThreadSource, id: u64) -> Result<ItemSummary> {
    let thread = source.fetch_thread(id).await?;

    let title = match (thread.item_type, thread.story_id) {
        (Some(ItemType::Comment), Some(story_id)) => match source.fetch_thread(story_id).await {
            Ok(story) => format!("Comment on {}", story.title.unwrap_or_default()),
            Err(e) => {
                debug!(id, story_id, error = %e, "failed to fetch parent story title");
                String::new()
            }
        },
        (Some(ItemType::Comment), None) => String::new(),
        _ => thread.title.clone().unwrap_or_default(),
    };

    Ok(ItemSummary {
        id,
        title,
        item_type: thread.item_type,
        comments: count_all_children(&thread),
        replies: thread.children.len() as u64,
        created_at: thread
            .created_at_i
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        url: item_url(id),
    })
}
