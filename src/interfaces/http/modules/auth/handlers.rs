//! Authentication HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{AuthResponse, LoginRequest, RegisterRequest, UserDto, UserResponse};
use crate::domain::{DomainError, RepositoryProvider, User, UserRole};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::interfaces::http::common::{ApiError, ApiResult, ErrorBody, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt_config: JwtConfig,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user = state
        .repos
        .users()
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| DomainError::Unauthorized("Invalid credentials".to_string()))?;

    if !verify_password(&request.password, &user.hashed_password) {
        return Err(ApiError(DomainError::Unauthorized(
            "Invalid credentials".to_string(),
        )));
    }

    let token = create_token(&user.id, &user.email, user.role.as_str(), &state.jwt_config)
        .map_err(|e| DomainError::Database(format!("Failed to create token: {}", e)))?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserDto::from(&user),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Validation error or email taken", body = ErrorBody)
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let role = match request.role.as_deref() {
        None => UserRole::Student,
        Some(raw) => {
            let role = UserRole::parse(raw)
                .ok_or_else(|| DomainError::Validation(format!("Invalid role: {}", raw)))?;
            if role == UserRole::Admin {
                return Err(ApiError(DomainError::Validation(
                    "Cannot register with admin role".to_string(),
                )));
            }
            role
        }
    };

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
            message: "User registered successfully".to_string(),
            user: UserDto::from(&user),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated", body = ErrorBody)
    )
)]
pub async fn me(
    State(state): State<AuthHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .repos
        .users()
        .find_by_id(&auth.user_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", &auth.user_id))?;

    Ok(Json(UserResponse {
        message: "Current user".to_string(),
        user: UserDto::from(&user),
    }))
}
