//! Sample data population.

use tracing::info;

use crate::models::{NewProperty, ParsePriceError};
use crate::properties::{PropertyWriter, WriteError};

// (title, description, price, location)
const SAMPLE_LISTINGS: [(&str, &str, &str, &str); 10] = [
    (
        "Luxury Downtown Apartment",
        "Beautiful 2-bedroom apartment in the heart of downtown with stunning city views, modern amenities, and walking distance to all major attractions.",
        "2500.00",
        "Downtown, New York",
    ),
    (
        "Suburban Family Home",
        "Spacious 4-bedroom family home with large backyard, garage, and quiet neighborhood. Perfect for families with children.",
        "450000.00",
        "Westchester, NY",
    ),
    (
        "Cozy Studio Near University",
        "Perfect studio apartment for students, just 5 minutes walk from campus. Furnished and utilities included.",
        "1200.00",
        "Cambridge, MA",
    ),
    (
        "Beachfront Condo",
        "Stunning oceanfront condominium with private beach access, 3 bedrooms, and panoramic ocean views.",
        "750000.00",
        "Miami Beach, FL",
    ),
    (
        "Modern Loft in Arts District",
        "Industrial-style loft with exposed brick walls, high ceilings, and premium finishes. Located in trendy arts district.",
        "3200.00",
        "Los Angeles, CA",
    ),
    (
        "Historic Brownstone",
        "Beautifully restored 19th-century brownstone with original details, 5 bedrooms, and private garden.",
        "1250000.00",
        "Brooklyn, NY",
    ),
    (
        "Mountain Cabin Retreat",
        "Peaceful cabin in the mountains with fireplace, deck, and hiking trails. Perfect weekend getaway.",
        "320000.00",
        "Aspen, CO",
    ),
    (
        "Tech Hub Apartment",
        "Modern 1-bedroom apartment in the tech district with smart home features and rooftop amenities.",
        "2800.00",
        "Seattle, WA",
    ),
    (
        "Victorian Mansion",
        "Grand Victorian mansion with original architecture, 8 bedrooms, and extensive grounds. Rich in history.",
        "2200000.00",
        "San Francisco, CA",
    ),
    (
        "Waterfront Townhouse",
        "Contemporary townhouse with private dock, 3 levels, and panoramic water views. Move-in ready.",
        "890000.00",
        "Baltimore, MD",
    ),
];

/// The fixed sample listings, in creation order.
pub fn sample_properties() -> Result<Vec<NewProperty>, ParsePriceError> {
    SAMPLE_LISTINGS
        .iter()
        .map(|(title, description, price, location)| {
            Ok(NewProperty {
                title: title.to_string(),
                description: description.to_string(),
                price: price.parse()?,
                location: location.to_string(),
            })
        })
        .collect()
}

/// Replaces the store contents with the sample listings.
///
/// Goes through the writer so every delete and create invalidates the
/// cache like any other write. Returns the number of listings created.
pub async fn seed_sample_properties(writer: &PropertyWriter) -> Result<usize, WriteError> {
    let cleared = writer.delete_all().await?;
    info!("Cleared {} existing properties", cleared);

    let samples = sample_properties().map_err(|e| WriteError::Invalid(e.to_string()))?;

    let mut created = 0;
    for new in samples {
        let property = writer.create(new).await?;
        info!("Created: {}", property.title);
        created += 1;
    }

    info!("Successfully created {} sample properties", created);
    Ok(created)
}
