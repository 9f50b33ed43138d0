//! Room DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Room;

/// Request to create a room in a hostel
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub hostel_id: String,
    #[validate(length(min = 1, max = 50))]
    pub room_type: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Partial room update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 50))]
    pub room_type: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub available: Option<bool>,
}

/// Room details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: String,
    pub hostel_id: String,
    pub room_type: String,
    pub price: f64,
    pub capacity: i32,
    pub available: bool,
    pub amenities: Vec<String>,
    pub created_at: String,
}

impl From<&Room> for RoomDto {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id.clone(),
            hostel_id: r.hostel_id.clone(),
            room_type: r.room_type.clone(),
            price: r.price,
            capacity: r.capacity,
            available: r.available,
            amenities: r.amenities.clone(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// Response wrapping a single room
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub message: String,
    pub room: RoomDto,
}

/// Response wrapping a room list
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomListResponse {
    pub message: String,
    pub rooms: Vec<RoomDto>,
}
