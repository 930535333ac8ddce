//! Request DTOs for the write surface
//!
//! Bodies accepted by the admin endpoints, plus their validation rules.

use serde::Deserialize;

use super::{Price, Property};

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_LOCATION_LENGTH: usize = 100;

/// Body of `POST /admin/properties/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewProperty {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    pub location: String,
}

impl NewProperty {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_title(&self.title).or_else(|| validate_location(&self.location))
    }
}

/// Body of `PUT /admin/properties/{id}/`. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PropertyUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub location: Option<String>,
}

impl PropertyUpdate {
    pub fn validate(&self) -> Option<String> {
        if self.is_empty() {
            return Some("Update must change at least one field".to_string());
        }
        self.title
            .as_deref()
            .and_then(validate_title)
            .or_else(|| self.location.as_deref().and_then(validate_location))
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.location.is_none()
    }

    /// Applies the present fields. `id` and `created_at` never change.
    pub fn apply(self, property: &mut Property) {
        if let Some(title) = self.title {
            property.title = title;
        }
        if let Some(description) = self.description {
            property.description = description;
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(location) = self.location {
            property.location = location;
        }
    }
}

fn validate_title(title: &str) -> Option<String> {
    if title.trim().is_empty() {
        return Some("Title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Some(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        ));
    }
    None
}

fn validate_location(location: &str) -> Option<String> {
    if location.trim().is_empty() {
        return Some("Location cannot be empty".to_string());
    }
    if location.chars().count() > MAX_LOCATION_LENGTH {
        return Some(format!(
            "Location exceeds maximum length of {} characters",
            MAX_LOCATION_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_property() -> NewProperty {
        NewProperty {
            title: "Test Property".to_string(),
            description: "A test property description".to_string(),
            price: "100000.00".parse().unwrap(),
            location: "Test City".to_string(),
        }
    }

    #[test]
    fn test_new_property_deserialize() {
        let json = r#"{"title":"Loft","price":"3200.00","location":"Los Angeles, CA"}"#;
        let req: NewProperty = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Loft");
        assert_eq!(req.description, "");
        assert_eq!(req.price.cents(), 320_000);
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(new_property().validate().is_none());
    }

    #[test]
    fn test_validate_empty_title() {
        let req = NewProperty {
            title: "   ".to_string(),
            ..new_property()
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_long_location() {
        let req = NewProperty {
            location: "x".repeat(MAX_LOCATION_LENGTH + 1),
            ..new_property()
        };
        assert!(req.validate().unwrap().contains("Location"));
    }

    #[test]
    fn test_empty_update_is_rejected() {
        assert!(PropertyUpdate::default().validate().is_some());
    }

    #[test]
    fn test_update_applies_only_present_fields() {
        let created_at = Utc::now();
        let mut property = Property {
            id: 3,
            title: "Original Property".to_string(),
            description: "Original Description".to_string(),
            price: "300000.00".parse().unwrap(),
            location: "Original Location".to_string(),
            created_at,
        };

        let update = PropertyUpdate {
            title: Some("Updated Property".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_none());
        update.apply(&mut property);

        assert_eq!(property.title, "Updated Property");
        assert_eq!(property.location, "Original Location");
        assert_eq!(property.created_at, created_at);
        assert_eq!(property.id, 3);
    }
}
