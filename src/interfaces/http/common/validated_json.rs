//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` deserializes the request body like `axum::Json<T>`
//! and then runs `validator::Validate::validate()` on the value, so
//! handlers only ever see request bodies that already passed their
//! declared field constraints.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ErrorBody;

/// An extractor that deserializes JSON and validates it.
///
/// # Usage
///
/// ```ignore
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateHostel {
///     #[validate(length(min = 1, max = 100))]
///     name: String,
///     #[validate(length(min = 1))]
///     address: String,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<CreateHostel>) {
///     // `body` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
pub enum ValidatedJsonRejection {
    /// JSON parsing failed.
    JsonError(JsonRejection),
    /// Validation failed.
    ValidationError(ValidationErrors),
}

/// Flatten field errors into a single "field: message" list.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (field, errs) in errors.field_errors() {
        for e in errs {
            let msg = match &e.message {
                Some(m) => m.to_string(),
                None => format!("{:?}", e.code),
            };
            parts.push(format!("{}: {}", field, msg));
        }
    }
    if parts.is_empty() {
        "Validation failed".to_string()
    } else {
        parts.join("; ")
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::JsonError(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(format!("Invalid JSON: {}", rejection)),
            ),
            Self::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody::new(validation_message(&errors)),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct CreateInquiryBody {
        #[validate(length(min = 1, message = "hostelId must not be empty"))]
        hostel_id: String,
        #[validate(length(min = 1, max = 2000))]
        message: String,
    }

    async fn handler(ValidatedJson(_body): ValidatedJson<CreateInquiryBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(req: Request<Body>) -> axum::http::Response<Body> {
        use tower::Service;
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    fn json_post(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let resp = send(json_post(
            serde_json::json!({"hostel_id": "h-1", "message": "Is a single room free?"}),
        ))
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_returns_400() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn validation_failure_returns_422_with_field_name() {
        let resp = send(json_post(
            serde_json::json!({"hostel_id": "", "message": "hello"}),
        ))
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("hostel_id"), "unexpected error: {}", error);
    }
}
