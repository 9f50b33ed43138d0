//! Favorite HTTP handlers
//!
//! Favorites are scoped to the authenticated user: you only ever see and
//! modify your own list.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{FavoriteDto, FavoriteListResponse, FavoriteRequest, FavoriteResponse};
use crate::domain::{DomainError, Favorite, RepositoryProvider};
use crate::interfaces::http::common::{ApiError, ApiResult, ErrorBody, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::users::DeletedResponse;

/// Favorite handlers state
#[derive(Clone)]
pub struct FavoriteAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/favorites",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The user's favorites", body = FavoriteListResponse)
    )
)]
pub async fn list_favorites(
    State(state): State<FavoriteAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<FavoriteListResponse>> {
    let favorites = state.repos.favorites().find_by_user(&auth.user_id).await?;
    Ok(Json(FavoriteListResponse {
        message: "Favorites retrieved successfully".to_string(),
        favorites: favorites.iter().map(FavoriteDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/favorites",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Favorite added", body = FavoriteResponse),
        (status = 400, description = "Hostel already in favorites", body = ErrorBody),
        (status = 404, description = "Hostel not found", body = ErrorBody)
    )
)]
pub async fn add_favorite(
    State(state): State<FavoriteAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<FavoriteRequest>,
) -> ApiResult<(StatusCode, Json<FavoriteResponse>)> {
    if state
        .repos
        .hostels()
        .find_by_id(&request.hostel_id)
        .await?
        .is_none()
    {
        return Err(ApiError(DomainError::not_found(
            "Hostel",
            &request.hostel_id,
        )));
    }

    if state
        .repos
        .favorites()
        .find_by_user_and_hostel(&auth.user_id, &request.hostel_id)
        .await?
        .is_some()
    {
        return Err(ApiError(DomainError::Conflict(
            "Hostel is already in favorites".to_string(),
        )));
    }

    let favorite = state
        .repos
        .favorites()
        .save(Favorite::new(&auth.user_id, &request.hostel_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteResponse {
            message: "Favorite added successfully".to_string(),
            favorite: FavoriteDto::from(&favorite),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/favorites",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite removed", body = DeletedResponse),
        (status = 404, description = "Favorite not found", body = ErrorBody)
    )
)]
pub async fn remove_favorite(
    State(state): State<FavoriteAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<FavoriteRequest>,
) -> ApiResult<Json<DeletedResponse>> {
    let favorite = state
        .repos
        .favorites()
        .find_by_user_and_hostel(&auth.user_id, &request.hostel_id)
        .await?
        .ok_or_else(|| DomainError::NotFound("Favorite not found".to_string()))?;

    state.repos.favorites().delete(&favorite.id).await?;

    Ok(Json(DeletedResponse {
        message: "Favorite removed successfully".to_string(),
    }))
}
