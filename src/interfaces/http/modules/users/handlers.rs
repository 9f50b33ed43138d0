//! User management HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{CreateUserRequest, DeletedResponse, UpdateUserRequest, UserListResponse};
use crate::domain::{DomainError, RepositoryProvider, User, UserRole};
use crate::infrastructure::crypto::password::hash_password;
use crate::interfaces::http::common::{ApiError, ApiResult, ErrorBody, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::auth::{UserDto, UserResponse};
use crate::interfaces::http::policy;

/// User handlers state
#[derive(Clone)]
pub struct UserAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = UserListResponse),
        (status = 403, description = "Admin access required", body = ErrorBody)
    )
)]
pub async fn list_users(
    State(state): State<UserAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<UserListResponse>> {
    policy::require_admin(&auth)?;

    let users = state.repos.users().find_all().await?;
    Ok(Json(UserListResponse {
        message: "Users retrieved successfully".to_string(),
        users: users.iter().map(UserDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<UserAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    policy::require_self_or_admin(&auth, &id)?;

    let user = state
        .repos
        .users()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", &id))?;

    Ok(Json(UserResponse {
        message: "User retrieved successfully".to_string(),
        user: UserDto::from(&user),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 403, description = "Admin access required", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<UserAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    policy::require_admin(&auth)?;

    let role = UserRole::parse(&request.role)
        .ok_or_else(|| DomainError::Validation(format!("Invalid role: {}", request.role)))?;

    if state
        .repos
        .users()
        .find_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(ApiError(DomainError::Conflict(
            "Email already registered".to_string(),
        )));
    }

    let hashed = hash_password(&request.password)?;

    let user = state
        .repos
        .users()
        .save(User::new(request.name, request.email, hashed, role))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "User created successfully".to_string(),
            user: UserDto::from(&user),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<UserAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    policy::require_self_or_admin(&auth, &id)?;

    let mut user = state
        .repos
        .users()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", &id))?;

    if let Some(name) = request.name {
        user.name = name;
    }
    if let Some(email) = request.email {
        if email != user.email
            && state.repos.users().find_by_email(&email).await?.is_some()
        {
            return Err(ApiError(DomainError::Conflict(
                "Email already registered".to_string(),
            )));
        }
        user.email = email;
    }
    if let Some(password) = request.password {
        user.hashed_password = hash_password(&password)?;
    }
    if let Some(raw) = request.role {
        policy::require_admin(&auth)?;
        user.role = UserRole::parse(&raw)
            .ok_or_else(|| DomainError::Validation(format!("Invalid role: {}", raw)))?;
    }
    user.updated_at = chrono::Utc::now();

    let user = state.repos.users().update(user).await?;

    Ok(Json(UserResponse {
        message: "User updated successfully".to_string(),
        user: UserDto::from(&user),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = DeletedResponse),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<UserAppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    policy::require_admin(&auth)?;

    if state.repos.users().find_by_id(&id).await?.is_none() {
        return Err(ApiError(DomainError::not_found("User", &id)));
    }
    state.repos.users().delete(&id).await?;

    Ok(Json(DeletedResponse {
        message: "User deleted successfully".to_string(),
    }))
}
