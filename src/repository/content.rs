//! Content repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::content::Content,
};

/// Field values for a content insert, already validated by the service
#[derive(Debug)]
pub struct NewContent {
    pub title: String,
    pub genre: Option<String>,
    pub description: String,
    pub published: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub author_id: i32,
    pub category_id: i32,
}

/// Field values for a partial content update; `None` keeps the prior value
#[derive(Debug, Default)]
pub struct ContentChanges {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub published: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub author_id: Option<i32>,
    pub category_id: Option<i32>,
}

#[derive(Clone)]
pub struct ContentRepository {
    pool: Pool<Postgres>,
}

impl ContentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all content, most recent first
    pub async fn list(&self) -> AppResult<Vec<Content>> {
        let rows = sqlx::query_as::<_, Content>("SELECT * FROM content ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get content by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Content> {
        sqlx::query_as::<_, Content>("SELECT * FROM content WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Content with id {} not found", id)))
    }

    /// Check whether a content row exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM content WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Create a new content row
    pub async fn create(&self, new: &NewContent) -> AppResult<Content> {
        let content = sqlx::query_as::<_, Content>(
            r#"
            INSERT INTO content (title, genre, description, published, publisher, author_id, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&new.title)
        .bind(&new.genre)
        .bind(&new.description)
        .bind(new.published)
        .bind(&new.publisher)
        .bind(new.author_id)
        .bind(new.category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(content)
    }

    /// Partially update a content row; absent fields retain their prior value
    pub async fn update(&self, id: i32, changes: &ContentChanges) -> AppResult<Content> {
        sqlx::query_as::<_, Content>(
            r#"
            UPDATE content SET
                title = COALESCE($1, title),
                genre = COALESCE($2, genre),
                description = COALESCE($3, description),
                published = COALESCE($4, published),
                publisher = COALESCE($5, publisher),
                author_id = COALESCE($6, author_id),
                category_id = COALESCE($7, category_id)
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.genre)
        .bind(&changes.description)
        .bind(changes.published)
        .bind(&changes.publisher)
        .bind(changes.author_id)
        .bind(changes.category_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Content with id {} not found", id)))
    }

    /// Delete a content row; dependent reviews go with it (ON DELETE CASCADE)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM content WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Content with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
