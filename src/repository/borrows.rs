//! Borrows repository for database operations

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::borrow::{Borrow, BorrowSummary, BorrowSummaryRow},
};

const BORROW_COLUMNS: &str = "id, book_id, quantity, due_date, created_at, updated_at";

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a borrow record and decrement the book's stock in a single
    /// transaction. The guarded UPDATE is the sole authority for the stock
    /// invariant: no borrow row commits without its decrement, and copies
    /// never go below zero.
    pub async fn create(
        &self,
        book_id: Uuid,
        quantity: i32,
        due_date: NaiveDate,
    ) -> AppResult<Borrow> {
        let mut tx = self.pool.begin().await?;

        let copies: i32 = sqlx::query_scalar("SELECT copies FROM books WHERE id = $1")
            .bind(book_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if copies < quantity {
            return Err(AppError::InsufficientStock {
                available: copies,
                requested: quantity,
            });
        }

        let decremented = sqlx::query(
            "UPDATE books SET copies = copies - $1, updated_at = $2 WHERE id = $3 AND copies >= $1",
        )
        .bind(quantity)
        .bind(Utc::now())
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        // The read above can be stale under concurrency; the guarded UPDATE
        // decides.
        if decremented.rows_affected() == 0 {
            return Err(AppError::InsufficientStock {
                available: copies,
                requested: quantity,
            });
        }

        let borrow = sqlx::query_as::<_, Borrow>(&format!(
            r#"
            INSERT INTO borrows (id, book_id, quantity, due_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING {BORROW_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(book_id)
        .bind(quantity)
        .bind(due_date)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(borrow)
    }

    /// Total quantity borrowed per book, joined with title and isbn.
    /// Books never borrowed (or since deleted) are absent from the result.
    pub async fn summary(&self) -> AppResult<Vec<BorrowSummary>> {
        let rows = sqlx::query_as::<_, BorrowSummaryRow>(
            r#"
            SELECT b.title, b.isbn, SUM(br.quantity)::bigint AS total_quantity
            FROM borrows br
            JOIN books b ON b.id = br.book_id
            GROUP BY b.id, b.title, b.isbn
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
