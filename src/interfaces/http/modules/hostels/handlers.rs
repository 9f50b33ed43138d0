//! Hostel HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{
    CreateHostelRequest, HostelDto, HostelListResponse, HostelResponse, UpdateHostelRequest,
};
use crate::domain::{DomainError, Hostel, HostelStatus, RepositoryProvider};
use crate::interfaces::http::common::{ApiError, ApiResult, ErrorBody, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::rooms::{RoomDto, RoomListResponse};
use crate::interfaces::http::modules::users::DeletedResponse;
use crate::interfaces::http::policy;

/// Hostel handlers state
#[derive(Clone)]
pub struct HostelAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Whether a listing is visible to the requesting user. Approved listings
/// are public; pending and rejected ones only the owner and admins see.
fn visible_to(hostel: &Hostel, auth: &AuthenticatedUser) -> bool {
    hostel.status == HostelStatus::Approved
        || auth.is_admin()
        || hostel.owner_id == auth.user_id
}

#[utoipa::path(
    get,
    path = "/api/v1/hostels",
    tag = "Hostels",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visible hostels", body = HostelListResponse)
    )
)]
pub async fn list_hostels(
    State(state): State<HostelAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<HostelListResponse>> {
    let hostels = state.repos.hostels().find_all().await?;
    let visible: Vec<HostelDto> = hostels
        .iter()
        .filter(|h| visible_to(h, &auth))
        .map(HostelDto::from)
        .collect();

    Ok(Json(HostelListResponse {
        message: "Hostels retrieved successfully".to_string(),
        hostels: visible,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/hostels/{id}",
    tag = "Hostels",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Hostel ID")),
    responses(
        (status = 200, description = "Hostel details", body = HostelResponse),
        (status = 404, description = "Hostel not found", body = ErrorBody)
    )
)]
pub async fn get_hostel(
    State(state): State<HostelAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<HostelResponse>> {
    let hostel = state
        .repos
        .hostels()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Hostel", &id))?;

    // Unapproved listings are reported as missing, not forbidden
    if !visible_to(&hostel, &auth) {
        return Err(ApiError(DomainError::not_found("Hostel", &id)));
    }

    Ok(Json(HostelResponse {
        message: "Hostel retrieved successfully".to_string(),
        hostel: HostelDto::from(&hostel),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/hostels",
    tag = "Hostels",
    security(("bearer_auth" = [])),
    request_body = CreateHostelRequest,
    responses(
        (status = 201, description = "Hostel created, pending approval", body = HostelResponse),
        (status = 403, description = "Owner role required", body = ErrorBody)
    )
)]
pub async fn create_hostel(
    State(state): State<HostelAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateHostelRequest>,
) -> ApiResult<(StatusCode, Json<HostelResponse>)> {
    policy::require_role(&auth, "owner")?;

    let owner_id = match request.owner_id {
        Some(id) if id != auth.user_id => {
            policy::require_admin(&auth)?;
            id
        }
        _ => auth.user_id.clone(),
    };

    let mut hostel = Hostel::new(
        owner_id,
        request.name,
        request.description,
        request.address,
        request.location_lat,
        request.location_lng,
        request.contact_number,
    );
    hostel.amenities = request.amenities;

    let hostel = state.repos.hostels().save(hostel).await?;

    Ok((
        StatusCode::CREATED,
        Json(HostelResponse {
            message: "Hostel created successfully".to_string(),
            hostel: HostelDto::from(&hostel),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/hostels/{id}",
    tag = "Hostels",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Hostel ID")),
    request_body = UpdateHostelRequest,
    responses(
        (status = 200, description = "Hostel updated", body = HostelResponse),
        (status = 403, description = "Not the owner", body = ErrorBody),
        (status = 404, description = "Hostel not found", body = ErrorBody)
    )
)]
pub async fn update_hostel(
    State(state): State<HostelAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateHostelRequest>,
) -> ApiResult<Json<HostelResponse>> {
    let mut hostel = state
        .repos
        .hostels()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Hostel", &id))?;

    policy::require_owner_or_admin(&auth, &hostel.owner_id)?;

    if let Some(name) = request.name {
        hostel.name = name;
    }
    if let Some(description) = request.description {
        hostel.description = description;
    }
    if let Some(address) = request.address {
        hostel.address = address;
    }
    if let Some(lat) = request.location_lat {
        hostel.location_lat = lat;
    }
    if let Some(lng) = request.location_lng {
        hostel.location_lng = lng;
    }
    if let Some(contact) = request.contact_number {
        hostel.contact_number = contact;
    }
    if let Some(amenities) = request.amenities {
        hostel.amenities = amenities;
    }
    if let Some(raw) = request.status {
        // Moderation decisions are admin-only
        policy::require_admin(&auth)?;
        hostel.status = HostelStatus::parse(&raw)
            .ok_or_else(|| DomainError::Validation(format!("Invalid hostel status: {}", raw)))?;
    }
    hostel.updated_at = chrono::Utc::now();

    let hostel = state.repos.hostels().update(hostel).await?;

    Ok(Json(HostelResponse {
        message: "Hostel updated successfully".to_string(),
        hostel: HostelDto::from(&hostel),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/hostels/{id}",
    tag = "Hostels",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Hostel ID")),
    responses(
        (status = 200, description = "Hostel deleted", body = DeletedResponse),
        (status = 404, description = "Hostel not found", body = ErrorBody)
    )
)]
pub async fn delete_hostel(
    State(state): State<HostelAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let hostel = state
        .repos
        .hostels()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Hostel", &id))?;

    policy::require_owner_or_admin(&auth, &hostel.owner_id)?;

    state.repos.hostels().delete(&id).await?;

    Ok(Json(DeletedResponse {
        message: "Hostel deleted successfully".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/hostels/{id}/rooms",
    tag = "Hostels",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Hostel ID")),
    responses(
        (status = 200, description = "Rooms of the hostel", body = RoomListResponse),
        (status = 404, description = "Hostel not found", body = ErrorBody)
    )
)]
pub async fn list_hostel_rooms(
    State(state): State<HostelAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<RoomListResponse>> {
    let hostel = state
        .repos
        .hostels()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Hostel", &id))?;

    if !visible_to(&hostel, &auth) {
        return Err(ApiError(DomainError::not_found("Hostel", &id)));
    }

    let rooms = state.repos.rooms().find_by_hostel(&id).await?;

    Ok(Json(RoomListResponse {
        message: "Rooms retrieved successfully".to_string(),
        rooms: rooms.iter().map(RoomDto::from).collect(),
    }))
}
