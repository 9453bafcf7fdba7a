//! hnfollow - follow Hacker News items and check them for new comments.
//!
//! Items are fetched live from the HN Firebase API, their reply counts are
//! kept in a key-value store, and a REST API reports which followed items
//! gained replies since the last check.

pub mod config;
pub mod error;
pub mod follow;
pub mod hn;
pub mod logging;
pub mod store;
pub mod web;

pub use config::Config;
pub use error::{HnError, Result};
pub use follow::{
    CheckReport, FollowOutcome, FollowService, NotifiableType, NotificationRecord,
    UnfollowOutcome,
};
pub use hn::{HnClient, ItemSource, ItemType, RemoteItem, ThreadSource};
pub use store::{FollowedItem, FollowedStore, KeyValueStore, MemoryStore, SharedStore};
pub use web::WebServer;
