//! Reviews repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::review::{Review, ReviewDetail},
};

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all reviews with reviewer names, most recent first
    pub async fn list(&self) -> AppResult<Vec<ReviewDetail>> {
        let rows = sqlx::query_as::<_, ReviewDetail>(
            r#"
            SELECT r.id, r.rating, r.comment, r.created, r.content_id, r.user_id,
                   u.first_name AS reviewer_first_name,
                   u.last_name AS reviewer_last_name
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            ORDER BY r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a review with reviewer names by ID
    pub async fn get_detail(&self, id: i32) -> AppResult<ReviewDetail> {
        sqlx::query_as::<_, ReviewDetail>(
            r#"
            SELECT r.id, r.rating, r.comment, r.created, r.content_id, r.user_id,
                   u.first_name AS reviewer_first_name,
                   u.last_name AS reviewer_last_name
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review with id {} not found", id)))
    }

    /// Get the bare review row by ID (for ownership checks)
    pub async fn get_by_id(&self, id: i32) -> AppResult<Review> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review with id {} not found", id)))
    }

    /// List reviews attached to a content row, most recent first
    pub async fn list_for_content(&self, content_id: i32) -> AppResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE content_id = $1 ORDER BY id DESC",
        )
        .bind(content_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a new review
    pub async fn create(
        &self,
        user_id: i32,
        content_id: i32,
        rating: i32,
        comment: Option<&str>,
        created: NaiveDate,
    ) -> AppResult<Review> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (rating, comment, created, user_id, content_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(rating)
        .bind(comment)
        .bind(created)
        .bind(user_id)
        .bind(content_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(review)
    }

    /// Partially update a review. A present field is applied even when it
    /// is zero or an empty string; an absent field keeps the prior value.
    pub async fn update(
        &self,
        id: i32,
        rating: Option<i32>,
        comment: Option<&str>,
    ) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews SET
                rating = COALESCE($1, rating),
                comment = COALESCE($2, comment)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(rating)
        .bind(comment)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review with id {} not found", id)))
    }

    /// Delete a review
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Review with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
