//! Error types for hnfollow.

use thiserror::Error;

/// Common error type for hnfollow.
#[derive(Error, Debug)]
pub enum HnError {
    /// The HN API could not be reached, answered with a non-success status,
    /// or returned a body that is not an item document.
    #[error("transport error: {0}")]
    Transport(String),

    /// The HN API answered successfully but the item does not exist.
    ///
    /// The Firebase API returns `null` for unknown or deleted ids instead of
    /// an error status, so this is kept apart from [`HnError::Transport`].
    #[error("HN item {0} is not a valid item")]
    InvalidItem(u64),

    /// The item type cannot be formatted as a notification.
    #[error("can't format this type of item: {0}")]
    UnsupportedItemType(String),

    /// Key-value store operation failed.
    #[error("store error: {0}")]
    Store(String),

    /// Validation error for user input or stored keys.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for HnError {
    fn from(e: sqlx::Error) -> Self {
        HnError::Store(e.to_string())
    }
}

/// Result type alias for hnfollow operations.
pub type Result<T> = std::result::Result<T, HnError>;
