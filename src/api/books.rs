//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

use super::{parse_book_id, ApiResponse, AppJson};

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(input): AppJson<CreateBook>,
) -> AppResult<(StatusCode, Json<ApiResponse<Book>>)> {
    let created = state.services.catalog.create_book(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Book created successfully", created)),
    ))
}

/// List books with filtering, sorting and limit
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ApiResponse<Vec<Book>>>> {
    let books = state.services.catalog.list_books(&query).await?;

    Ok(Json(ApiResponse::new(
        "Books retrieved successfully",
        books,
    )))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/api/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Malformed book ID"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let id = parse_book_id(&book_id)?;
    let book = state.services.catalog.get_book(id).await?;

    Ok(Json(ApiResponse::new("Book retrieved successfully", book)))
}

/// Update an existing book. Absent fields retain their stored values.
#[utoipa::path(
    put,
    path = "/api/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed book ID or invalid input"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "ISBN already exists")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
    AppJson(update): AppJson<UpdateBook>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let id = parse_book_id(&book_id)?;
    let updated = state.services.catalog.update_book(id, update).await?;

    Ok(Json(ApiResponse::new("Book updated successfully", updated)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "Malformed book ID"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let id = parse_book_id(&book_id)?;
    state.services.catalog.delete_book(id).await?;

    Ok(Json(ApiResponse::empty("Book deleted successfully")))
}
