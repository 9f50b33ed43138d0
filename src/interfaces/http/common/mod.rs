//! Shared HTTP plumbing: error responder and validated JSON extractor.
//!
//! Wire format, kept uniform across every endpoint:
//! success: `{"message": "...", "<resource>": {...}}`,
//! failure: `{"error": "..."}`.

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::DomainError;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Responder that maps the domain error taxonomy onto HTTP statuses.
///
/// Conflict maps to 400 (not 409): existing clients treat a double-booking
/// as a bad request, so that status is part of the contract.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::Validation(m) | DomainError::Conflict(m) => {
                (StatusCode::BAD_REQUEST, m.clone())
            }
            DomainError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            DomainError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m.clone()),
            DomainError::Forbidden(m) => (StatusCode::FORBIDDEN, m.clone()),
            DomainError::Database(m) => {
                tracing::error!("Database error: {}", m);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_bad_request() {
        let response =
            ApiError(DomainError::Conflict("already booked".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError(DomainError::NotFound("gone".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_is_masked() {
        let response =
            ApiError(DomainError::Database("secret details".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
