//! Catalog management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, Genre, UpdateBook},
    repository::Repository,
};

/// Flatten validator output into a single message
fn validation_error(errors: validator::ValidationErrors) -> AppError {
    AppError::Validation(errors.to_string())
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new book
    pub async fn create_book(&self, input: CreateBook) -> AppResult<Book> {
        input.validate().map_err(validation_error)?;

        let created = self.repository.books.create(&input).await?;
        tracing::info!("Book {} created (isbn {})", created.id, created.isbn);
        Ok(created)
    }

    /// List books. An unrecognized genre filter is dropped rather than
    /// rejected.
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let genre = query
            .filter
            .as_deref()
            .and_then(|f| f.parse::<Genre>().ok());

        self.repository.books.list(genre, query).await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Update a book. Fields absent from the request retain their stored
    /// values.
    pub async fn update_book(&self, id: Uuid, update: UpdateBook) -> AppResult<Book> {
        update.validate().map_err(validation_error)?;

        if let Some(ref isbn) = update.isbn {
            if self.repository.books.isbn_exists(isbn, Some(id)).await? {
                return Err(AppError::Conflict(
                    "A book with this ISBN already exists".to_string(),
                ));
            }
        }

        self.repository.books.update(id, &update).await
    }

    /// Delete a book
    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
