//! API Handlers
//!
//! Thin HTTP handlers translating requests into accessor, writer,
//! invalidator and metrics calls.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::cache::CacheBackend;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    HealthResponse, MessageResponse, MetricsResponse, NewProperty, Property,
    PropertyListResponse, PropertyUpdate,
};
use crate::properties::{Invalidator, MetricsReporter, PropertyAccessor, PropertyWriter};
use crate::store::PropertyStore;

/// Application state shared across all handlers.
///
/// Every component receives the same cache and store handles at
/// construction; handlers never touch the backends directly.
#[derive(Clone)]
pub struct AppState {
    pub accessor: PropertyAccessor,
    pub writer: PropertyWriter,
    pub invalidator: Invalidator,
    pub metrics: MetricsReporter,
}

impl AppState {
    /// Wires the components with the default TTLs.
    pub fn new(cache: Arc<dyn CacheBackend>, store: Arc<dyn PropertyStore>) -> Self {
        let invalidator = Invalidator::new(cache.clone());
        Self {
            accessor: PropertyAccessor::new(cache.clone(), store.clone()),
            writer: PropertyWriter::new(store, invalidator.clone()),
            metrics: MetricsReporter::new(cache),
            invalidator,
        }
    }

    /// Wires the components with the TTLs from `config`.
    pub fn from_config(
        config: &Config,
        cache: Arc<dyn CacheBackend>,
        store: Arc<dyn PropertyStore>,
    ) -> Self {
        let mut state = Self::new(cache, store);
        state.accessor = state
            .accessor
            .with_ttls(config.list_cache_ttl, config.detail_cache_ttl);
        state
    }
}

/// Ids that are not unsigned integers cannot name a property.
fn parse_id(raw: &str) -> Result<u64> {
    raw.parse().map_err(|_| ApiError::PropertyNotFound)
}

/// Handler for GET /
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<PropertyListResponse>> {
    info!("property_list called");
    let properties = state.accessor.get_all_properties().await?;
    Ok(Json(PropertyListResponse::new(properties)))
}

/// Handler for GET /:id/
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>> {
    info!("property_detail called for property ID: {}", id);
    let id = parse_id(&id)?;
    state
        .accessor
        .get_property_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::PropertyNotFound)
}

/// Handler for GET /cache/metrics/
///
/// Always succeeds; backend faults show up in `cache_metrics.error`.
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    info!("cache_metrics called");
    Json(MetricsResponse::new(state.metrics.get_cache_metrics().await))
}

/// Handler for GET /cache/clear/
///
/// Drops the listing entry only.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.invalidator.clear_all_properties().await;
    info!("Cache manually cleared");
    Json(MessageResponse::new("Cache cleared successfully"))
}

/// Handler for POST /admin/properties/
pub async fn create_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<NewProperty>, JsonRejection>,
) -> Result<(StatusCode, Json<Property>)> {
    let Json(req) = body?;
    let property = state.writer.create(req).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Handler for PUT /admin/properties/:id/
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<PropertyUpdate>, JsonRejection>,
) -> Result<Json<Property>> {
    let id = parse_id(&id)?;
    let Json(req) = body?;
    Ok(Json(state.writer.update(id, req).await?))
}

/// Handler for DELETE /admin/properties/:id/
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    let property = state.writer.delete(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Property {} deleted successfully",
        property.id
    ))))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
