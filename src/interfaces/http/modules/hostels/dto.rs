//! Hostel DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Hostel;

/// Request to create a hostel listing
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostelRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[validate(length(min = 1, max = 300))]
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub location_lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub location_lng: f64,
    #[validate(length(min = 1, max = 30))]
    pub contact_number: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Admins may create listings on behalf of an owner
    pub owner_id: Option<String>,
}

/// Partial hostel update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHostelRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 300))]
    pub address: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub location_lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub location_lng: Option<f64>,
    #[validate(length(min = 1, max = 30))]
    pub contact_number: Option<String>,
    pub amenities: Option<Vec<String>>,
    /// Moderation status, admin-only: "pending", "approved" or "rejected"
    pub status: Option<String>,
}

/// Hostel details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostelDto {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub location_lat: f64,
    pub location_lng: f64,
    pub contact_number: String,
    pub amenities: Vec<String>,
    pub status: String,
    pub created_at: String,
}

impl From<&Hostel> for HostelDto {
    fn from(h: &Hostel) -> Self {
        Self {
            id: h.id.clone(),
            owner_id: h.owner_id.clone(),
            name: h.name.clone(),
            description: h.description.clone(),
            address: h.address.clone(),
            location_lat: h.location_lat,
            location_lng: h.location_lng,
            contact_number: h.contact_number.clone(),
            amenities: h.amenities.clone(),
            status: h.status.as_str().to_string(),
            created_at: h.created_at.to_rfc3339(),
        }
    }
}

/// Response wrapping a single hostel
#[derive(Debug, Serialize, ToSchema)]
pub struct HostelResponse {
    pub message: String,
    pub hostel: HostelDto,
}

/// Response wrapping a hostel list
#[derive(Debug, Serialize, ToSchema)]
pub struct HostelListResponse {
    pub message: String,
    pub hostels: Vec<HostelDto>,
}
