//! Error types for Biblio server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid book ID")]
    InvalidId(String),

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Due date is required")]
    MissingDueDate,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not enough copies available")]
    InsufficientStock { available: i32, requested: i32 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[schema(value_type = Object, nullable)]
    pub error: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone(), Some(json!(msg)))
            }
            AppError::InvalidId(detail) => (
                StatusCode::BAD_REQUEST,
                "Invalid book ID".to_string(),
                Some(json!(detail)),
            ),
            AppError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "Quantity must be at least 1".to_string(),
                Some(json!("Quantity must be at least 1")),
            ),
            AppError::MissingDueDate => (
                StatusCode::BAD_REQUEST,
                "Due date is required".to_string(),
                Some(json!("Due date is required")),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), Some(json!(msg))),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone(), Some(json!(msg))),
            AppError::InsufficientStock {
                available,
                requested,
            } => (
                StatusCode::BAD_REQUEST,
                "Not enough copies available".to_string(),
                Some(json!({ "available": available, "requested": requested })),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    None,
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
            error: details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn client_input_failures_map_to_400() {
        assert_eq!(
            status_of(AppError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::InvalidId("nope".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(AppError::InvalidQuantity), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::MissingDueDate), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::InsufficientStock {
                available: 1,
                requested: 2
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            status_of(AppError::NotFound("Book not found".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn conflict_maps_to_409() {
        assert_eq!(
            status_of(AppError::Conflict("duplicate isbn".into())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn store_failures_map_to_500() {
        assert_eq!(
            status_of(AppError::Database(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
