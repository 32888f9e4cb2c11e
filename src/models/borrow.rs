//! Borrow record model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Borrow record from the database. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Borrow {
    pub id: Uuid,
    #[serde(rename = "book")]
    pub book_id: Uuid,
    pub quantity: i32,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create borrow request.
///
/// Fields are kept loose (`Option`) so the service can run presence checks
/// in a defined order instead of failing at deserialization.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrow {
    /// Book identity
    pub book: Option<String>,
    pub quantity: Option<i32>,
    pub due_date: Option<NaiveDate>,
}

/// Book fields carried into the borrow summary
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowedBook {
    pub title: String,
    pub isbn: String,
}

/// Total quantity borrowed for one book, across all borrow records
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowSummary {
    pub book: BorrowedBook,
    pub total_quantity: i64,
}

/// Flat row backing [`BorrowSummary`]
#[derive(Debug, FromRow)]
pub struct BorrowSummaryRow {
    pub title: String,
    pub isbn: String,
    pub total_quantity: i64,
}

impl From<BorrowSummaryRow> for BorrowSummary {
    fn from(row: BorrowSummaryRow) -> Self {
        Self {
            book: BorrowedBook {
                title: row.title,
                isbn: row.isbn,
            },
            total_quantity: row.total_quantity,
        }
    }
}
