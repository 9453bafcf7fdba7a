//! Hacker News API access.
//!
//! Live items come from the Firebase API; full reply trees come from the
//! Algolia API.

pub mod client;
pub mod summary;
pub mod types;

pub use client::{HnClient, ItemSource, ThreadSource};
pub use summary::{count_all_children, summarize};
pub use types::{item_url, ItemSummary, ItemType, RemoteItem, ThreadItem, HN_ITEM_URL};
