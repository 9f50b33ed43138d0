//! Favorite DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Favorite;

/// Request to add or remove a favorite
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    #[validate(length(min = 1))]
    pub hostel_id: String,
}

/// Favorite details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub id: String,
    pub user_id: String,
    pub hostel_id: String,
    pub created_at: String,
}

impl From<&Favorite> for FavoriteDto {
    fn from(f: &Favorite) -> Self {
        Self {
            id: f.id.clone(),
            user_id: f.user_id.clone(),
            hostel_id: f.hostel_id.clone(),
            created_at: f.created_at.to_rfc3339(),
        }
    }
}

/// Response wrapping a single favorite
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteResponse {
    pub message: String,
    pub favorite: FavoriteDto,
}

/// Response wrapping a favorite list
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteListResponse {
    pub message: String,
    pub favorites: Vec<FavoriteDto>,
}
