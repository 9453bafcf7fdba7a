//! API handlers.

pub mod items;

pub use items::*;

use std::sync::Arc;

use crate::follow::FollowService;
use crate::hn::ThreadSource;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Follow/unfollow/check operations.
    pub follow: FollowService,
    /// Reply-tree source used for item summaries.
    pub threads: Arc<dyn ThreadSource>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(follow: FollowService, threads: Arc<dyn ThreadSource>) -> Self {
        Self { follow, threads }
    }
}
