//! User management DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::interfaces::http::modules::auth::UserDto;

/// Admin-side user creation (unlike register, any role is allowed)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// "student", "owner" or "admin"
    pub role: String,
}

/// Partial user update
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
    /// Role changes are admin-only
    pub role: Option<String>,
}

/// Response wrapping a user list
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub message: String,
    pub users: Vec<UserDto>,
}

/// Response for deletions
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub message: String,
}
