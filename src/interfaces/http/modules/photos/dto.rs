//! Photo DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{DomainError, DomainResult, Photo, PhotoOwner};

/// Request to attach a photo. Exactly one of `userId`, `hostelId`,
/// `roomId` must be set.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoRequest {
    #[validate(url)]
    pub url: String,
    #[serde(default)]
    pub is_primary: bool,
    pub user_id: Option<String>,
    pub hostel_id: Option<String>,
    pub room_id: Option<String>,
}

/// Filter for listing photos. Exactly one of the three IDs must be set.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PhotoFilter {
    pub user_id: Option<String>,
    pub hostel_id: Option<String>,
    pub room_id: Option<String>,
}

/// Pick the single owner link out of the three optional IDs.
pub fn resolve_owner(
    user_id: Option<String>,
    hostel_id: Option<String>,
    room_id: Option<String>,
) -> DomainResult<PhotoOwner> {
    match (user_id, hostel_id, room_id) {
        (Some(id), None, None) => Ok(PhotoOwner::User(id)),
        (None, Some(id), None) => Ok(PhotoOwner::Hostel(id)),
        (None, None, Some(id)) => Ok(PhotoOwner::Room(id)),
        _ => Err(DomainError::Validation(
            "Exactly one of userId, hostelId, roomId must be provided".to_string(),
        )),
    }
}

/// Photo details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDto {
    pub id: String,
    pub url: String,
    pub is_primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    pub created_at: String,
}

impl From<&Photo> for PhotoDto {
    fn from(p: &Photo) -> Self {
        let (user_id, hostel_id, room_id) = match &p.owner {
            PhotoOwner::User(id) => (Some(id.clone()), None, None),
            PhotoOwner::Hostel(id) => (None, Some(id.clone()), None),
            PhotoOwner::Room(id) => (None, None, Some(id.clone())),
        };
        Self {
            id: p.id.clone(),
            url: p.url.clone(),
            is_primary: p.is_primary,
            user_id,
            hostel_id,
            room_id,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// Response wrapping a single photo
#[derive(Debug, Serialize, ToSchema)]
pub struct PhotoResponse {
    pub message: String,
    pub photo: PhotoDto,
}

/// Response wrapping a photo list
#[derive(Debug, Serialize, ToSchema)]
pub struct PhotoListResponse {
    pub message: String,
    pub photos: Vec<PhotoDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_owner_required() {
        assert!(resolve_owner(Some("u".into()), None, None).is_ok());
        assert!(resolve_owner(None, Some("h".into()), None).is_ok());
        assert!(resolve_owner(None, None, Some("r".into())).is_ok());
        assert!(resolve_owner(None, None, None).is_err());
        assert!(resolve_owner(Some("u".into()), Some("h".into()), None).is_err());
        assert!(resolve_owner(Some("u".into()), Some("h".into()), Some("r".into())).is_err());
    }
}
