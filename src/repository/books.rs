//! Books repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, Genre, UpdateBook},
};

/// Column list for every book SELECT. `available` is derived from `copies`
/// here and nowhere else.
const BOOK_COLUMNS: &str =
    "id, title, author, genre, isbn, description, copies, copies > 0 AS available, created_at, updated_at";

/// Map a `sortBy` query value to a real column. Unrecognized values fall
/// back to the creation timestamp, mirroring the silent drop of an
/// unrecognized genre filter.
fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "title" => "title",
        "author" => "author",
        "genre" => "genre",
        "isbn" => "isbn",
        "copies" => "copies",
        "updatedAt" => "updated_at",
        _ => "created_at",
    }
}

/// Translate a unique-constraint violation (the isbn index) into a Conflict
fn map_unique_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = err {
        if db.code().as_deref() == Some("23505") {
            return AppError::Conflict("A book with this ISBN already exists".to_string());
        }
    }
    AppError::Database(err)
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (id, title, author, genre, isbn, description, copies, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.genre)
        .bind(&book.isbn)
        .bind(book.description.as_deref())
        .bind(book.copies)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(created)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// List books with optional genre filter, sorting and limit
    pub async fn list(&self, genre: Option<Genre>, query: &BookQuery) -> AppResult<Vec<Book>> {
        let direction = match query.sort.as_deref() {
            Some("asc") => "ASC",
            _ => "DESC",
        };
        let order_by = sort_column(query.sort_by.as_deref().unwrap_or("createdAt"));
        let limit = query.limit.unwrap_or(10).max(0);

        let books = if let Some(genre) = genre {
            sqlx::query_as::<_, Book>(&format!(
                "SELECT {BOOK_COLUMNS} FROM books WHERE genre = $1 ORDER BY {order_by} {direction} LIMIT $2"
            ))
            .bind(genre)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Book>(&format!(
                "SELECT {BOOK_COLUMNS} FROM books ORDER BY {order_by} {direction} LIMIT $1"
            ))
            .bind(limit)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(books)
    }

    /// Update a book. NULL parameters keep the stored value (merge
    /// semantics for partial updates).
    pub async fn update(&self, id: Uuid, update: &UpdateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            r#"
            UPDATE books SET
                title = COALESCE($1, title),
                author = COALESCE($2, author),
                genre = COALESCE($3, genre),
                isbn = COALESCE($4, isbn),
                description = COALESCE($5, description),
                copies = COALESCE($6, copies),
                updated_at = $7
            WHERE id = $8
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(update.title.as_deref())
        .bind(update.author.as_deref())
        .bind(update.genre)
        .bind(update.isbn.as_deref())
        .bind(update.description.as_deref())
        .bind(update.copies)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_violation)?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Delete a book. Borrow records referencing it are left untouched.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(())
    }

    /// Check if ISBN already exists
    pub async fn isbn_exists(&self, isbn: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1 AND id != $2)")
                .bind(isbn)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?
        };

        Ok(exists)
    }
}
