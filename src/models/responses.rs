//! Response DTOs for the property API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use super::Property;
use crate::properties::CacheMetrics;

/// Response body for `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct PropertyListResponse {
    pub properties: Vec<Property>,
    pub count: usize,
    /// The listing is always served through the cache-aside path
    pub cached: bool,
}

impl PropertyListResponse {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            count: properties.len(),
            properties,
            cached: true,
        }
    }
}

/// Response body for `GET /cache/metrics/`
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub cache_metrics: CacheMetrics,
    pub message: String,
}

impl MetricsResponse {
    pub fn new(cache_metrics: CacheMetrics) -> Self {
        Self {
            cache_metrics,
            message: "Cache metrics retrieved successfully".to_string(),
        }
    }
}

/// Plain confirmation body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_list_response_shape() {
        let property = Property {
            id: 1,
            title: "Property 1".to_string(),
            description: "Description 1".to_string(),
            price: "100000.00".parse().unwrap(),
            location: "Location 1".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(PropertyListResponse::new(vec![property])).unwrap();

        assert_eq!(json["count"], 1);
        assert_eq!(json["cached"], true);
        assert_eq!(json["properties"][0]["price"].as_f64(), Some(100000.0));
        assert_eq!(json["properties"][0]["created_at"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_metrics_response_serialize() {
        let json = serde_json::to_value(MetricsResponse::new(CacheMetrics::default())).unwrap();
        assert!(json.get("cache_metrics").is_some());
        assert!(json["message"].as_str().unwrap().contains("retrieved"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
