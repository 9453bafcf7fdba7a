//! HTTP API for following HN items.
//!
//! Every route is a GET under `/api/v1`, plus `/health` and the Swagger UI.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
