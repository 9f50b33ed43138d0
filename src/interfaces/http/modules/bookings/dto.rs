//! Booking DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Booking;

/// Request to create a booking
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room_id: String,
    /// Defaults to the authenticated user; booking for someone else is
    /// admin-only
    pub student_id: Option<String>,
    /// Calendar date (`2025-08-01`) or RFC 3339 timestamp
    #[validate(length(min = 1))]
    pub check_in_date: String,
    #[validate(length(min = 1))]
    pub check_out_date: String,
}

/// Partial booking update
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub room_id: Option<String>,
    pub student_id: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    /// "pending", "confirmed", "cancelled" or "completed"
    pub status: Option<String>,
}

/// Booking details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: String,
    pub room_id: String,
    pub student_id: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: String,
    pub created_at: String,
}

impl From<&Booking> for BookingDto {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id.clone(),
            room_id: b.room_id.clone(),
            student_id: b.student_id.clone(),
            check_in_date: b.start_date.to_rfc3339(),
            check_out_date: b.end_date.to_rfc3339(),
            status: b.status.as_str().to_string(),
            created_at: b.created_at.to_rfc3339(),
        }
    }
}

/// Response wrapping a single booking
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub message: String,
    pub booking: BookingDto,
}

/// Response wrapping a booking list
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingListResponse {
    pub message: String,
    pub bookings: Vec<BookingDto>,
}

/// Response from cancelling a booking
#[derive(Debug, Serialize, ToSchema)]
pub struct CancelBookingResponse {
    pub message: String,
}
