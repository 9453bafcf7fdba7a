//! Following HN items and checking them for new replies.

pub mod service;
pub mod types;

pub use service::FollowService;
pub use types::{
    CheckReport, FollowOutcome, NotifiableType, NotificationRecord, UnfollowOutcome,
};
