//! Category model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::ALPHANUMERIC_SPACE;

/// Full category model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Create category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(
        length(min = 10, message = "Category name must be at least 10 characters"),
        regex(
            path = *ALPHANUMERIC_SPACE,
            message = "Category name may only contain letters, numbers and spaces"
        )
    )]
    pub name: String,
}

/// Update category request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    #[validate(
        length(min = 10, message = "Category name must be at least 10 characters"),
        regex(
            path = *ALPHANUMERIC_SPACE,
            message = "Category name may only contain letters, numbers and spaces"
        )
    )]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_must_be_long_enough() {
        let req = CreateCategory {
            name: "Short".to_string(),
        };
        assert!(req.validate().is_err());

        let req = CreateCategory {
            name: "Science Fiction".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn category_name_rejects_punctuation() {
        let req = CreateCategory {
            name: "Sci-Fi and Fantasy!".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn absent_name_on_update_is_valid() {
        let req = UpdateCategory { name: None };
        assert!(req.validate().is_ok());
    }
}
