//! SeaORM repository implementations

pub mod booking_repository;
pub mod favorite_repository;
pub mod hostel_repository;
pub mod inquiry_repository;
pub mod photo_repository;
pub mod repository_provider;
pub mod room_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::JsonValue;

/// Amenity lists are stored as JSON arrays of strings.
pub(crate) fn amenities_to_json(amenities: &[String]) -> JsonValue {
    JsonValue::Array(
        amenities
            .iter()
            .map(|a| JsonValue::String(a.clone()))
            .collect(),
    )
}

pub(crate) fn amenities_from_json(value: &JsonValue) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
