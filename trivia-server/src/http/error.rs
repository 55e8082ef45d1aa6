//! API error types with IntoResponse
//!
//! Every failure returns the same envelope the original clients expect:
//! `{success: false, error: <status>, message: <string>}`. The three causes
//! the handlers distinguish map to distinct status codes: missing entity is
//! 404, invalid input is 422, a malformed listing request is 400, and a
//! storage failure is 503 (logged, generic message).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (422)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Malformed request (400)
    BadRequest { message: String },

    /// Database error (503, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                format!("{} '{}' not found", resource, id),
            ),
            Self::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "storage unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::InvalidReference { field, value } => {
                Self::Validation(ValidationError::UnknownReference { field, value })
            }
            e => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn envelope(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::Missing { field: "answer" });
        let (status, body) = envelope(err).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "answer is required");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            resource: "question",
            id: "69".into(),
        };
        let (status, body) = envelope(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "question '69' not found");
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        let err = ApiError::BadRequest {
            message: "bad query string".into(),
        };
        let (status, body) = envelope(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], 400);
    }

    #[tokio::test]
    async fn storage_failure_is_503_with_generic_message() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let (status, body) = envelope(err).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        // The underlying cause is logged, never shown to the client.
        assert_eq!(body["message"], "storage unavailable");
    }

    #[tokio::test]
    async fn fk_violation_surfaces_as_validation() {
        let err = ApiError::from(DbError::InvalidReference {
            field: "category",
            value: "99".into(),
        });
        let (status, body) = envelope(err).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "unknown category '99'");
    }
}
