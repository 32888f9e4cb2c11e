//! API handlers for Biblio REST endpoints

pub mod books;
pub mod borrows;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;

/// Uniform success envelope
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Envelope with `data: null` (delete responses)
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

/// JSON extractor that routes body-parse failures through [`AppError`], so
/// malformed input gets the standard error envelope instead of axum's
/// default rejection.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(AppJson(value))
    }
}

/// Parse a path identity string, normalizing malformed ids to a 400
pub(crate) fn parse_book_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidId(format!("{} is not a valid book ID", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Genre;

    #[test]
    fn success_envelope_shape() {
        let response = ApiResponse::new("Book created successfully", Genre::Fiction);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Book created successfully");
        assert_eq!(json["data"], "FICTION");
    }

    #[test]
    fn empty_envelope_has_null_data() {
        let response = ApiResponse::<Genre>::empty("Book deleted successfully");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert!(json["data"].is_null());
    }

    #[test]
    fn parse_book_id_rejects_malformed_input() {
        assert!(parse_book_id("123").is_err());
        assert!(parse_book_id("").is_err());
        assert!(parse_book_id(&Uuid::new_v4().to_string()).is_ok());
    }
}
