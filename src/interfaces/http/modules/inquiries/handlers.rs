//! Inquiry HTTP handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{
    CreateInquiryRequest, InquiryDto, InquiryFilter, InquiryListResponse, InquiryResponse,
};
use crate::domain::{DomainError, Inquiry, RepositoryProvider};
use crate::interfaces::http::common::{ApiError, ApiResult, ErrorBody, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::policy;

/// Inquiry handlers state
#[derive(Clone)]
pub struct InquiryAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    post,
    path = "/api/v1/inquiries",
    tag = "Inquiries",
    security(("bearer_auth" = [])),
    request_body = CreateInquiryRequest,
    responses(
        (status = 201, description = "Inquiry sent", body = InquiryResponse),
        (status = 404, description = "Hostel not found", body = ErrorBody)
    )
)]
pub async fn create_inquiry(
    State(state): State<InquiryAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateInquiryRequest>,
) -> ApiResult<(StatusCode, Json<InquiryResponse>)> {
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

    let inquiry = state
        .repos
        .inquiries()
        .save(Inquiry::new(
            &auth.user_id,
            &request.hostel_id,
            &request.message,
        ))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InquiryResponse {
            message: "Inquiry sent successfully".to_string(),
            inquiry: InquiryDto::from(&inquiry),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/inquiries",
    tag = "Inquiries",
    security(("bearer_auth" = [])),
    params(InquiryFilter),
    responses(
        (status = 200, description = "Inquiries", body = InquiryListResponse),
        (status = 403, description = "Not the hostel owner", body = ErrorBody),
        (status = 404, description = "Hostel not found", body = ErrorBody)
    )
)]
pub async fn list_inquiries(
    State(state): State<InquiryAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(filter): Query<InquiryFilter>,
) -> ApiResult<Json<InquiryListResponse>> {
    let inquiries = match filter.hostel_id {
        Some(hostel_id) => {
            let hostel = state
                .repos
                .hostels()
                .find_by_id(&hostel_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Hostel", &hostel_id))?;
            policy::require_owner_or_admin(&auth, &hostel.owner_id)?;
            state.repos.inquiries().find_by_hostel(&hostel_id).await?
        }
        None => state.repos.inquiries().find_by_student(&auth.user_id).await?,
    };

    Ok(Json(InquiryListResponse {
        message: "Inquiries retrieved successfully".to_string(),
        inquiries: inquiries.iter().map(InquiryDto::from).collect(),
    }))
}
