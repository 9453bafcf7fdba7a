//! Followed-item handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::AppState;
use crate::follow::{FollowOutcome, NotificationRecord, UnfollowOutcome};
use crate::hn::{summarize, ItemSummary};
use crate::store::FollowedItem;
use crate::web::dto::{ApiResponse, FollowResponse, FollowedItemBody, ItemId, MessageResponse};
use crate::web::error::{ApiError, ErrorBody};

/// Response header carrying the number of items left out of a check.
pub const SKIPPED_ITEMS_HEADER: &str = "x-skipped-items";

/// GET /api/v1 - List available routes.
pub async fn api_index() -> Json<ApiResponse<BTreeMap<&'static str, &'static str>>> {
    let routes = BTreeMap::from([
        ("GET /follow/:id", "follow an item"),
        ("GET /unfollow/:id", "unfollow an item"),
        ("GET /get/:id", "get an item's details"),
        ("GET /list", "list all items you're following"),
        ("GET /check", "check for new comments on items you're following"),
        ("GET /summary/:id", "summarize an item and its discussion"),
    ]);
    Json(ApiResponse::new(routes))
}

/// Follow an item.
///
/// Returns 201 when the item is newly followed and 200 when it already was.
#[utoipa::path(
    get,
    path = "/api/v1/follow/{id}",
    tag = "Follow",
    params(("id" = u64, Path, description = "HN item id")),
    responses(
        (status = 201, description = "Item followed", body = FollowResponse),
        (status = 200, description = "Already following", body = FollowResponse),
        (status = 400, description = "Invalid id, unknown item or HN unreachable", body = ErrorBody)
    )
)]
pub async fn follow_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<(StatusCode, Json<ApiResponse<FollowResponse>>), ApiError> {
    let outcome = state.follow.follow(id).await?;

    let (status, response) = match outcome {
        FollowOutcome::AlreadyFollowing { id } => (
            StatusCode::OK,
            FollowResponse {
                message: format!("Already following HN item {}", id),
                item: None,
            },
        ),
        FollowOutcome::Followed { id, comments, url } => (
            StatusCode::CREATED,
            FollowResponse {
                message: format!("Followed HN item {}", id),
                item: Some(FollowedItemBody { id, comments, url }),
            },
        ),
    };

    Ok((status, Json(ApiResponse::new(response))))
}

/// Unfollow an item.
#[utoipa::path(
    get,
    path = "/api/v1/unfollow/{id}",
    tag = "Follow",
    params(("id" = u64, Path, description = "HN item id")),
    responses(
        (status = 200, description = "Item unfollowed", body = MessageResponse),
        (status = 404, description = "Not following the item", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn unfollow_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    match state.follow.unfollow(id).await? {
        UnfollowOutcome::NotFollowing { id } => Err(ApiError::not_found(format!(
            "Not following HN item {}",
            id
        ))),
        UnfollowOutcome::Unfollowed { id } => Ok(Json(ApiResponse::new(MessageResponse::new(
            format!("Unfollowed HN item {}", id),
        )))),
    }
}

/// Get the stored snapshot of a followed item.
#[utoipa::path(
    get,
    path = "/api/v1/get/{id}",
    tag = "Follow",
    params(("id" = u64, Path, description = "HN item id")),
    responses(
        (status = 200, description = "Followed item", body = FollowedItem),
        (status = 404, description = "Not following the item", body = ErrorBody)
    )
)]
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<ApiResponse<FollowedItem>>, ApiError> {
    let item = state
        .follow
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Not following HN item {}", id)))?;

    Ok(Json(ApiResponse::new(item)))
}

/// List all followed items.
#[utoipa::path(
    get,
    path = "/api/v1/list",
    tag = "Follow",
    responses(
        (status = 200, description = "Followed items", body = Vec<FollowedItem>),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<FollowedItem>>>, ApiError> {
    let items = state.follow.list().await?;
    Ok(Json(ApiResponse::new(items)))
}

/// Check every followed item for new comments.
///
/// Items that cannot be fetched or formatted are left out; their number is
/// reported in the `x-skipped-items` header.
#[utoipa::path(
    get,
    path = "/api/v1/check",
    tag = "Follow",
    responses(
        (status = 200, description = "One record per checked item", body = Vec<NotificationRecord>,
            headers(("x-skipped-items" = usize, description = "Items left out of the result"))),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn check_items(
    State(state): State<Arc<AppState>>,
) -> Result<
    (
        [(&'static str, String); 1],
        Json<ApiResponse<Vec<NotificationRecord>>>,
    ),
    ApiError,
> {
    let report = state.follow.check_all().await?;

    Ok((
        [(SKIPPED_ITEMS_HEADER, report.skipped.to_string())],
        Json(ApiResponse::new(report.notifications)),
    ))
}

/// Summarize an item and its discussion from the Algolia API.
#[utoipa::path(
    get,
    path = "/api/v1/summary/{id}",
    tag = "Items",
    params(("id" = u64, Path, description = "HN item id")),
    responses(
        (status = 200, description = "Item summary", body = ItemSummary),
        (status = 400, description = "Invalid id, unknown item or HN unreachable", body = ErrorBody)
    )
)]
pub async fn item_summary(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<ApiResponse<ItemSummary>>, ApiError> {
    let summary = summarize(state.threads.as_ref(), id).await?;
    Ok(Json(ApiResponse::new(summary)))
}
