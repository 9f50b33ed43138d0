//! Photo HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{
    resolve_owner, CreatePhotoRequest, PhotoDto, PhotoFilter, PhotoListResponse, PhotoResponse,
};
use crate::domain::{DomainError, Photo, PhotoOwner, RepositoryProvider};
use crate::interfaces::http::common::{ApiResult, ErrorBody, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::users::DeletedResponse;
use crate::interfaces::http::policy;

/// Photo handlers state
#[derive(Clone)]
pub struct PhotoAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Resolve the user who controls photos for `owner`: the user themselves,
/// or the owner of the hostel (directly or through a room).
async fn controlling_user(
    repos: &Arc<dyn RepositoryProvider>,
    owner: &PhotoOwner,
) -> Result<String, DomainError> {
    match owner {
        PhotoOwner::User(id) => {
            if repos.users().find_by_id(id).await?.is_none() {
                return Err(DomainError::not_found("User", id));
            }
            Ok(id.clone())
        }
        PhotoOwner::Hostel(id) => {
            let hostel = repos
                .hostels()
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::not_found("Hostel", id))?;
            Ok(hostel.owner_id)
        }
        PhotoOwner::Room(id) => {
            let room = repos
                .rooms()
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::not_found("Room", id))?;
            let hostel = repos
                .hostels()
                .find_by_id(&room.hostel_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Hostel", &room.hostel_id))?;
            Ok(hostel.owner_id)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/photos",
    tag = "Photos",
    security(("bearer_auth" = [])),
    params(PhotoFilter),
    responses(
        (status = 200, description = "Photos for the entity, primary first", body = PhotoListResponse),
        (status = 400, description = "Filter must name exactly one entity", body = ErrorBody)
    )
)]
pub async fn list_photos(
    State(state): State<PhotoAppState>,
    Query(filter): Query<PhotoFilter>,
) -> ApiResult<Json<PhotoListResponse>> {
    let owner = resolve_owner(filter.user_id, filter.hostel_id, filter.room_id)?;
    let photos = state.repos.photos().find_by_owner(&owner).await?;

    Ok(Json(PhotoListResponse {
        message: "Photos retrieved successfully".to_string(),
        photos: photos.iter().map(PhotoDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/photos",
    tag = "Photos",
    security(("bearer_auth" = [])),
    request_body = CreatePhotoRequest,
    responses(
        (status = 201, description = "Photo attached", body = PhotoResponse),
        (status = 400, description = "Invalid owner link", body = ErrorBody),
        (status = 403, description = "Not allowed to attach photos here", body = ErrorBody),
        (status = 404, description = "Linked entity not found", body = ErrorBody)
    )
)]
pub async fn create_photo(
    State(state): State<PhotoAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreatePhotoRequest>,
) -> ApiResult<(StatusCode, Json<PhotoResponse>)> {
    let owner = resolve_owner(request.user_id, request.hostel_id, request.room_id)?;

    let controller = controlling_user(&state.repos, &owner).await?;
    policy::require_owner_or_admin(&auth, &controller)?;

    let photo = state
        .repos
        .photos()
        .save(Photo::new(request.url, owner, request.is_primary))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PhotoResponse {
            message: "Photo added successfully".to_string(),
            photo: PhotoDto::from(&photo),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/photos/{id}",
    tag = "Photos",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Photo deleted", body = DeletedResponse),
        (status = 404, description = "Photo not found", body = ErrorBody)
    )
)]
pub async fn delete_photo(
    State(state): State<PhotoAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let photo = state
        .repos
        .photos()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Photo", &id))?;

    let controller = controlling_user(&state.repos, &photo.owner).await?;
    policy::require_owner_or_admin(&auth, &controller)?;

    state.repos.photos().delete(&id).await?;

    Ok(Json(DeletedResponse {
        message: "Photo deleted successfully".to_string(),
    }))
}
