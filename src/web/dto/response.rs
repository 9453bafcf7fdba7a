//! Response DTOs for the Web API.

use serde::Serialize;
use utoipa::ToSchema;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Plain status message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Item stored by a successful follow.
#[derive(Debug, Serialize, ToSchema)]
pub struct FollowedItemBody {
    /// HN item id.
    pub id: u64,
    /// Reply count at follow time.
    pub comments: u64,
    /// Item page URL.
    pub url: String,
}

/// Response to a follow request.
#[derive(Debug, Serialize, ToSchema)]
pub struct FollowResponse {
    pub message: String,
    /// Present only when the item was newly followed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<FollowedItemBody>,
}
