//! Validation of request input.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::web::error::ApiError;

/// HN item id taken from the `:id` path segment.
///
/// Only plain decimal digit strings are accepted, so ids such as `+5`, `0x10`
/// or values beyond `u64` are rejected with 400 before reaching a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub u64);

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid path: {}", e)))?;

        parse_item_id(&raw).map(ItemId)
    }
}

/// Parse a decimal item id.
pub fn parse_item_id(raw: &str) -> Result<u64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::bad_request(format!("Invalid HN item id: {raw}")));
    }

    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid HN item id: {raw}")))
}
