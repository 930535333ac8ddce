//! API Routes
//!
//! Configures the Axum router with the read, cache and admin endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, create_handler, delete_handler, detail_handler, health_handler,
    list_handler, metrics_handler, update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - All properties, newest first
/// - `GET /:id/` - A single property
/// - `GET /cache/metrics/` - Cache hit/miss metrics
/// - `GET /cache/clear/` - Drop the cached listing
/// - `GET /health` - Health check
/// - `POST /admin/properties/` - Create a property
/// - `PUT|DELETE /admin/properties/:id/` - Update or delete a property
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(list_handler))
        .route("/:id/", get(detail_handler))
        .route("/cache/metrics/", get(metrics_handler))
        .route("/cache/clear/", get(clear_cache_handler))
        .route("/health", get(health_handler))
        .route("/admin/properties/", post(create_handler))
        .route(
            "/admin/properties/:id/",
            put(update_handler).delete(delete_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
