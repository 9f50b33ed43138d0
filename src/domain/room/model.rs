//! Room domain entity

use chrono::{DateTime, Utc};

/// A bookable unit belonging to a hostel.
///
/// `available` is a derived/cached flag; the authoritative state is the set
/// of non-cancelled bookings for the room. Create sets it to false, cancel
/// sets it back to true.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub hostel_id: String,
    pub room_type: String,
    pub price: f64,
    pub capacity: i32,
    pub available: bool,
    pub amenities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(
        hostel_id: impl Into<String>,
        room_type: impl Into<String>,
        price: f64,
        capacity: i32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            hostel_id: hostel_id.into(),
            room_type: room_type.into(),
            price,
            capacity,
            available: true,
            amenities: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
