//! Inquiry DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Inquiry;

/// Request to send an inquiry to a hostel owner
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    #[validate(length(min = 1))]
    pub hostel_id: String,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

/// Filter for listing inquiries
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct InquiryFilter {
    /// List inquiries for this hostel (owner or admin only); when absent
    /// the caller's own inquiries are returned
    pub hostel_id: Option<String>,
}

/// Inquiry details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDto {
    pub id: String,
    pub student_id: String,
    pub hostel_id: String,
    pub message: String,
    pub created_at: String,
}

impl From<&Inquiry> for InquiryDto {
    fn from(i: &Inquiry) -> Self {
        Self {
            id: i.id.clone(),
            student_id: i.student_id.clone(),
            hostel_id: i.hostel_id.clone(),
            message: i.message.clone(),
            created_at: i.created_at.to_rfc3339(),
        }
    }
}

/// Response wrapping a single inquiry
#[derive(Debug, Serialize, ToSchema)]
pub struct InquiryResponse {
    pub message: String,
    pub inquiry: InquiryDto,
}

/// Response wrapping an inquiry list
#[derive(Debug, Serialize, ToSchema)]
pub struct InquiryListResponse {
    pub message: String,
    pub inquiries: Vec<InquiryDto>,
}
