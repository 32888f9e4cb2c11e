//! Borrow transaction endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::borrow::{Borrow, BorrowSummary, CreateBorrow},
};

use super::{ApiResponse, AppJson};

/// Borrow copies of a book
#[utoipa::path(
    post,
    path = "/api/borrow",
    tag = "borrow",
    request_body = CreateBorrow,
    responses(
        (status = 201, description = "Borrow created", body = Borrow),
        (status = 400, description = "Invalid request or not enough copies"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn create_borrow(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<CreateBorrow>,
) -> AppResult<(StatusCode, Json<ApiResponse<Borrow>>)> {
    let borrow = state.services.borrows.create_borrow(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Book borrowed successfully", borrow)),
    ))
}

/// Aggregate borrow totals per book
#[utoipa::path(
    get,
    path = "/api/borrow",
    tag = "borrow",
    responses(
        (status = 200, description = "Borrow summary", body = Vec<BorrowSummary>)
    )
)]
pub async fn borrow_summary(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<BorrowSummary>>>> {
    let summary = state.services.borrows.summary().await?;

    Ok(Json(ApiResponse::new(
        "Borrowed books summary retrieved successfully",
        summary,
    )))
}
