//! Booking HTTP handlers
//!
//! Thin wrappers over [`BookingService`]; all booking business rules
//! (date validation, overlap, state machine) live in the service and
//! the repository transaction.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{
    BookingDto, BookingListResponse, BookingResponse, CancelBookingResponse,
    CreateBookingRequest, UpdateBookingRequest,
};
use crate::application::services::booking::{CreateBookingData, UpdateBookingData};
use crate::application::BookingService;
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{ApiResult, ErrorBody, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::policy;

/// Booking handlers state
#[derive(Clone)]
pub struct BookingAppState {
    pub service: Arc<BookingService>,
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Whether `auth` may act on an existing booking: the student who made
/// it, the owner of the hostel the room belongs to, or an admin.
async fn authorize_booking_access(
    state: &BookingAppState,
    auth: &AuthenticatedUser,
    booking_id: &str,
) -> Result<(), DomainError> {
    let booking = state.service.get(booking_id).await?;
    if auth.is_admin() || booking.student_id == auth.user_id {
        return Ok(());
    }

    // Room and hostel may have been deleted out from under the booking
    if let Some(room) = state.repos.rooms().find_by_id(&booking.room_id).await? {
        if let Some(hostel) = state.repos.hostels().find_by_id(&room.hostel_id).await? {
            if hostel.owner_id == auth.user_id {
                return Ok(());
            }
        }
    }

    Err(DomainError::Forbidden(
        "You do not have access to this booking".to_string(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Invalid dates or room already booked", body = ErrorBody),
        (status = 404, description = "Room not found", body = ErrorBody)
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingResponse>)> {
    let student_id = match request.student_id {
        Some(id) if id != auth.user_id => {
            policy::require_admin(&auth)?;
            id
        }
        _ => auth.user_id.clone(),
    };

    let booking = state
        .service
        .create(CreateBookingData {
            room_id: request.room_id,
            student_id,
            check_in_date: request.check_in_date,
            check_out_date: request.check_out_date,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            message: "Booking created successfully".to_string(),
            booking: BookingDto::from(&booking),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All bookings", body = BookingListResponse),
        (status = 404, description = "No bookings found", body = ErrorBody)
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<BookingListResponse>> {
    policy::require_admin(&auth)?;

    let bookings = state.service.list_all().await?;
    Ok(Json(BookingListResponse {
        message: "Bookings retrieved successfully".to_string(),
        bookings: bookings.iter().map(BookingDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = BookingResponse),
        (status = 404, description = "Booking not found", body = ErrorBody)
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    authorize_booking_access(&state, &auth, &id).await?;

    let booking = state.service.get(&id).await?;
    Ok(Json(BookingResponse {
        message: "Booking retrieved successfully".to_string(),
        booking: BookingDto::from(&booking),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/student/{student_id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("student_id" = String, Path, description = "Student user ID")),
    responses(
        (status = 200, description = "Bookings made by the student", body = BookingListResponse),
        (status = 404, description = "No bookings found for this student", body = ErrorBody)
    )
)]
pub async fn list_bookings_for_student(
    State(state): State<BookingAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(student_id): Path<String>,
) -> ApiResult<Json<BookingListResponse>> {
    policy::require_self_or_admin(&auth, &student_id)?;

    let bookings = state.service.for_student(&student_id).await?;
    Ok(Json(BookingListResponse {
        message: "Bookings retrieved successfully".to_string(),
        bookings: bookings.iter().map(BookingDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/room/{room_id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("room_id" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Bookings for the room", body = BookingListResponse),
        (status = 404, description = "No bookings found for this room", body = ErrorBody)
    )
)]
pub async fn list_bookings_for_room(
    State(state): State<BookingAppState>,
    Path(room_id): Path<String>,
) -> ApiResult<Json<BookingListResponse>> {
    let bookings = state.service.for_room(&room_id).await?;
    Ok(Json(BookingListResponse {
        message: "Bookings retrieved successfully".to_string(),
        bookings: bookings.iter().map(BookingDto::from).collect(),
    }))
}

#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Booking ID")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = BookingResponse),
        (status = 400, description = "Invalid update or dates conflict", body = ErrorBody),
        (status = 404, description = "Booking not found", body = ErrorBody)
    )
)]
pub async fn update_booking(
    State(state): State<BookingAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateBookingRequest>,
) -> ApiResult<Json<BookingResponse>> {
    authorize_booking_access(&state, &auth, &id).await?;

    let booking = state
        .service
        .update(
            &id,
            UpdateBookingData {
                room_id: request.room_id,
                student_id: request.student_id,
                check_in_date: request.check_in_date,
                check_out_date: request.check_out_date,
                status: request.status,
            },
        )
        .await?;

    Ok(Json(BookingResponse {
        message: "Booking updated successfully".to_string(),
        booking: BookingDto::from(&booking),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled", body = CancelBookingResponse),
        (status = 400, description = "Booking already completed", body = ErrorBody),
        (status = 404, description = "Booking not found", body = ErrorBody)
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<CancelBookingResponse>> {
    authorize_booking_access(&state, &auth, &id).await?;

    state.service.cancel(&id).await?;

    Ok(Json(CancelBookingResponse {
        message: "Booking cancelled successfully".to_string(),
    }))
}
