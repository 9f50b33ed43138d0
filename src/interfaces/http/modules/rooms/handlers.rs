//! Room HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{CreateRoomRequest, RoomDto, RoomListResponse, RoomResponse, UpdateRoomRequest};
use crate::domain::{DomainError, RepositoryProvider, Room};
use crate::interfaces::http::common::{ApiResult, ErrorBody, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::users::DeletedResponse;
use crate::interfaces::http::policy;

/// Room handlers state
#[derive(Clone)]
pub struct RoomAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Resolve the owner of the hostel a room belongs to.
async fn hostel_owner(
    repos: &Arc<dyn RepositoryProvider>,
    hostel_id: &str,
) -> Result<String, DomainError> {
    let hostel = repos
        .hostels()
        .find_by_id(hostel_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Hostel", hostel_id))?;
    Ok(hostel.owner_id)
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All rooms", body = RoomListResponse)
    )
)]
pub async fn list_rooms(State(state): State<RoomAppState>) -> ApiResult<Json<RoomListResponse>> {
    let rooms = state.repos.rooms().find_all().await?;
    Ok(Json(RoomListResponse {
        message: "Rooms retrieved successfully".to_string(),
        rooms: rooms.iter().map(RoomDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = RoomResponse),
        (status = 404, description = "Room not found", body = ErrorBody)
    )
)]
pub async fn get_room(
    State(state): State<RoomAppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RoomResponse>> {
    let room = state
        .repos
        .rooms()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Room", &id))?;

    Ok(Json(RoomResponse {
        message: "Room retrieved successfully".to_string(),
        room: RoomDto::from(&room),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 403, description = "Not the hostel owner", body = ErrorBody),
        (status = 404, description = "Hostel not found", body = ErrorBody)
    )
)]
pub async fn create_room(
    State(state): State<RoomAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<(StatusCode, Json<RoomResponse>)> {
    let owner_id = hostel_owner(&state.repos, &request.hostel_id).await?;
    policy::require_owner_or_admin(&auth, &owner_id)?;

    let mut room = Room::new(
        request.hostel_id,
        request.room_type,
        request.price,
        request.capacity,
    );
    room.amenities = request.amenities;

    let room = state.repos.rooms().save(room).await?;

    Ok((
        StatusCode::CREATED,
        Json(RoomResponse {
            message: "Room created successfully".to_string(),
            room: RoomDto::from(&room),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = RoomResponse),
        (status = 404, description = "Room not found", body = ErrorBody)
    )
)]
pub async fn update_room(
    State(state): State<RoomAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateRoomRequest>,
) -> ApiResult<Json<RoomResponse>> {
    let mut room = state
        .repos
        .rooms()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Room", &id))?;

    let owner_id = hostel_owner(&state.repos, &room.hostel_id).await?;
    policy::require_owner_or_admin(&auth, &owner_id)?;

    if let Some(room_type) = request.room_type {
        room.room_type = room_type;
    }
    if let Some(price) = request.price {
        room.price = price;
    }
    if let Some(capacity) = request.capacity {
        room.capacity = capacity;
    }
    if let Some(amenities) = request.amenities {
        room.amenities = amenities;
    }
    if let Some(available) = request.available {
        room.available = available;
    }

    let room = state.repos.rooms().update(room).await?;

    Ok(Json(RoomResponse {
        message: "Room updated successfully".to_string(),
        room: RoomDto::from(&room),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = DeletedResponse),
        (status = 404, description = "Room not found", body = ErrorBody)
    )
)]
pub async fn delete_room(
    State(state): State<RoomAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let room = state
        .repos
        .rooms()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Room", &id))?;

    let owner_id = hostel_owner(&state.repos, &room.hostel_id).await?;
    policy::require_owner_or_admin(&auth, &owner_id)?;

    state.repos.rooms().delete(&id).await?;

    Ok(Json(DeletedResponse {
        message: "Room deleted successfully".to_string(),
    }))
}
