use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers;

/// API routes plus the compiled frontend as fallback
pub fn configure_routes(static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/accounts", get(handlers::accounts::list_all))
        .fallback_service(ServeDir::new(static_dir))
}
