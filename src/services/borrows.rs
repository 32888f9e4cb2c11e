//! Borrow transaction service

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::borrow::{Borrow, BorrowSummary, CreateBorrow},
    repository::Repository,
};

/// Shape checks for a borrow request, in request order; the first failing
/// check wins. Stock and existence are checked later, inside the
/// repository's transaction.
fn validate_borrow_request(request: &CreateBorrow) -> AppResult<(Uuid, i32, NaiveDate)> {
    let book_id = request
        .book
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| AppError::InvalidId("Invalid book ID provided".to_string()))?;

    let quantity = match request.quantity {
        Some(q) if q >= 1 => q,
        _ => return Err(AppError::InvalidQuantity),
    };

    let due_date = request.due_date.ok_or(AppError::MissingDueDate)?;

    Ok((book_id, quantity, due_date))
}

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow copies of a book: validate the request shape, then let the
    /// repository apply the stock invariant atomically.
    pub async fn create_borrow(&self, request: CreateBorrow) -> AppResult<Borrow> {
        let (book_id, quantity, due_date) = validate_borrow_request(&request)?;

        let borrow = self
            .repository
            .borrows
            .create(book_id, quantity, due_date)
            .await?;

        tracing::info!(
            "Borrow {} created: {} copies of book {}",
            borrow.id,
            quantity,
            book_id
        );
        Ok(borrow)
    }

    /// Total quantity ever borrowed, per book
    pub async fn summary(&self) -> AppResult<Vec<BorrowSummary>> {
        self.repository.borrows.summary().await
    }
}
