//! Content (catalogued book/media) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{author::Author, category::Category, review::Review, ALPHANUMERIC_SPACE};

/// Full content model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Content {
    pub id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub description: String,
    pub published: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub author_id: i32,
    pub category_id: i32,
}

/// Content with its author, category and reviews resolved
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContentDetail {
    pub id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub description: String,
    pub published: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub author: Author,
    pub category: Category,
    pub reviews: Vec<Review>,
}

/// Create content request.
///
/// Required fields are `Option` so that their absence surfaces as a 400
/// validation error with a useful message instead of a body-decode
/// rejection; presence is checked in the catalog service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContent {
    pub title: Option<String>,
    pub genre: Option<String>,
    #[validate(
        length(min = 10, message = "Description must be at least 10 characters"),
        regex(
            path = *ALPHANUMERIC_SPACE,
            message = "Description may only contain letters, numbers and spaces"
        )
    )]
    pub description: Option<String>,
    /// Publication date as YYYY-MM-DD
    pub published: Option<String>,
    pub publisher: Option<String>,
    pub author_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Update content request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateContent {
    pub title: Option<String>,
    pub genre: Option<String>,
    #[validate(
        length(min = 10, message = "Description must be at least 10 characters"),
        regex(
            path = *ALPHANUMERIC_SPACE,
            message = "Description may only contain letters, numbers and spaces"
        )
    )]
    pub description: Option<String>,
    /// Publication date as YYYY-MM-DD
    pub published: Option<String>,
    pub publisher: Option<String>,
    pub author_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Parse a publication date in strict YYYY-MM-DD form
pub fn parse_published(value: &str) -> Result<NaiveDate, crate::error::AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        crate::error::AppError::Validation(format!(
            "Invalid published date '{}', expected YYYY-MM-DD",
            value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_date_accepts_iso_format() {
        assert_eq!(
            parse_published("2020-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn published_date_rejects_slashes() {
        assert!(parse_published("2020/01/01").is_err());
        assert!(parse_published("01-01-2020").is_err());
        assert!(parse_published("2020-13-01").is_err());
    }

    #[test]
    fn description_must_be_long_and_plain() {
        let mut req = CreateContent {
            title: Some("T".to_string()),
            genre: None,
            description: Some("short".to_string()),
            published: None,
            publisher: None,
            author_id: Some(1),
            category_id: Some(1),
        };
        assert!(req.validate().is_err());

        req.description = Some("long enough text".to_string());
        assert!(req.validate().is_ok());

        req.description = Some("long enough, with punctuation!".to_string());
        assert!(req.validate().is_err());
    }
}
