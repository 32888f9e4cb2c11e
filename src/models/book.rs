//! Book (catalog entry) model and related types.
//!
//! `available` is never stored: every repository query derives it from
//! `copies > 0`, so no API input can set it independently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Book genre classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "genre")]
pub enum Genre {
    #[sqlx(rename = "FICTION")]
    Fiction,
    #[sqlx(rename = "NON_FICTION")]
    NonFiction,
    #[sqlx(rename = "SCIENCE")]
    Science,
    #[sqlx(rename = "HISTORY")]
    History,
    #[sqlx(rename = "BIOGRAPHY")]
    Biography,
    #[sqlx(rename = "FANTASY")]
    Fantasy,
}

impl std::str::FromStr for Genre {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FICTION" => Ok(Genre::Fiction),
            "NON_FICTION" => Ok(Genre::NonFiction),
            "SCIENCE" => Ok(Genre::Science),
            "HISTORY" => Ok(Genre::History),
            "BIOGRAPHY" => Ok(Genre::Biography),
            "FANTASY" => Ok(Genre::Fantasy),
            _ => Err(()),
        }
    }
}

/// Book record as stored and returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub isbn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub copies: i32,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub genre: Genre,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Copies must be a non-negative number"))]
    pub copies: i32,
}

/// Update book request. Absent fields retain their stored values.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: Option<String>,
    pub genre: Option<Genre>,
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Copies must be a non-negative number"))]
    pub copies: Option<i32>,
}

/// Query parameters for listing books
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookQuery {
    /// Genre value to filter on; unrecognized values are ignored
    pub filter: Option<String>,
    /// Sort direction, `asc` or `desc` (default `desc`)
    pub sort: Option<String>,
    /// Field to sort by (default `createdAt`)
    pub sort_by: Option<String>,
    /// Maximum number of records to return (default 10)
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_parses_wire_names() {
        assert_eq!("FICTION".parse::<Genre>(), Ok(Genre::Fiction));
        assert_eq!("NON_FICTION".parse::<Genre>(), Ok(Genre::NonFiction));
        assert_eq!("FANTASY".parse::<Genre>(), Ok(Genre::Fantasy));
    }

    #[test]
    fn genre_rejects_unknown_values() {
        assert!("ROMANCE".parse::<Genre>().is_err());
        assert!("fiction".parse::<Genre>().is_err());
        assert!("".parse::<Genre>().is_err());
    }

    #[test]
    fn genre_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Genre::NonFiction).unwrap(),
            "\"NON_FICTION\""
        );
    }

    #[test]
    fn book_serializes_camel_case() {
        let book = Book {
            id: Uuid::nil(),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: Genre::Science,
            isbn: "111".to_string(),
            description: None,
            copies: 3,
            available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["available"], true);
        // absent description is omitted, not null
        assert!(json.get("description").is_none());
    }

    #[test]
    fn create_book_rejects_negative_copies() {
        let input = CreateBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: Genre::Science,
            isbn: "111".to_string(),
            description: None,
            copies: -1,
        };
        assert!(input.validate().is_err());
    }
}
