//! Review model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full review model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created: NaiveDate,
    pub user_id: i32,
    pub content_id: i32,
}

/// Review with the reviewer's name resolved
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ReviewDetail {
    pub id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created: NaiveDate,
    pub content_id: i32,
    pub user_id: i32,
    pub reviewer_first_name: Option<String>,
    pub reviewer_last_name: Option<String>,
}

/// Create review request.
///
/// `content_id` and `rating` are `Option` so their absence surfaces as a
/// 400 validation error; `user_id` and `created` are never taken from the
/// client.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReview {
    pub content_id: Option<i32>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// Update review request (partial).
///
/// A field that is present is applied even when it is falsy: `rating: 0`
/// sets the rating to zero and `comment: ""` sets the comment to the
/// empty string. An absent (or JSON null) field retains the prior value;
/// there is no way to reset a comment to SQL NULL through this shape.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReview {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}
