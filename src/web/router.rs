//! Router configuration for Web API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::dto::{FollowResponse, FollowedItemBody, MessageResponse};
use super::error::{ErrorBody, ErrorCode, ErrorDetail};
use super::handlers::{
    self, api_index, check_items, follow_item, get_item, item_summary, list_items, unfollow_item,
    AppState,
};
use super::middleware::create_cors_layer;
use crate::follow::{NotifiableType, NotificationRecord};
use crate::hn::{ItemSummary, ItemType};
use crate::store::FollowedItem;

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(title = "hnfollow", description = "Follow Hacker News items and check them for new comments"),
    paths(
        handlers::items::follow_item,
        handlers::items::unfollow_item,
        handlers::items::get_item,
        handlers::items::list_items,
        handlers::items::check_items,
        handlers::items::item_summary,
    ),
    components(schemas(
        FollowResponse,
        FollowedItemBody,
        MessageResponse,
        FollowedItem,
        NotificationRecord,
        NotifiableType,
        ItemSummary,
        ItemType,
        ErrorBody,
        ErrorDetail,
        ErrorCode,
    )),
    tags(
        (name = "Follow", description = "Follow, unfollow and check items"),
        (name = "Items", description = "Item summaries")
    )
)]
pub struct ApiDoc;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route("/", get(api_index))
        .route("/follow/:id", get(follow_item))
        .route("/unfollow/:id", get(unfollow_item))
        .route("/get/:id", get(get_item))
        .route("/list", get(list_items))
        .route("/check", get(check_items))
        .route("/summary/:id", get(item_summary));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
