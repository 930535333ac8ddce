//! API Module
//!
//! HTTP handlers and routing for the property service.
//!
//! # Endpoints
//! - `GET /` - All properties, newest first
//! - `GET /:id/` - A single property
//! - `GET /cache/metrics/` - Cache hit/miss metrics
//! - `GET /cache/clear/` - Drop the cached listing
//! - `GET /health` - Health check
//! - `/admin/properties/...` - Create, update and delete

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
