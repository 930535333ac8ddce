//! Domain records and HTTP DTOs
//!
//! `Property` is both the persisted record and its cached snapshot; the
//! request and response types wrap it for the API layer.

pub mod property;
pub mod requests;
pub mod responses;

pub use property::{ParsePriceError, Price, Property};
pub use requests::{NewProperty, PropertyUpdate};
pub use responses::{HealthResponse, MessageResponse, MetricsResponse, PropertyListResponse};
