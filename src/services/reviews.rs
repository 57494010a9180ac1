//! Review management service

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::review::{CreateReview, ReviewDetail, UpdateReview},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<ReviewDetail>> {
        self.repository.reviews.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<ReviewDetail> {
        self.repository.reviews.get_detail(id).await
    }

    /// Create a review on behalf of the authenticated user.
    ///
    /// The owner and creation date are server-assigned; the referenced
    /// content row must exist.
    pub async fn create(&self, user_id: i32, request: CreateReview) -> AppResult<ReviewDetail> {
        let content_id = request.content_id.ok_or_else(|| {
            AppError::Validation("content_id must be provided when creating a review".to_string())
        })?;
        let rating = request
            .rating
            .ok_or_else(|| AppError::Validation("rating must be provided".to_string()))?;

        if !self.repository.content.exists(content_id).await? {
            return Err(AppError::NotFound(format!(
                "Content with id {} does not exist",
                content_id
            )));
        }

        let created = self
            .repository
            .reviews
            .create(
                user_id,
                content_id,
                rating,
                request.comment.as_deref(),
                Utc::now().date_naive(),
            )
            .await?;

        self.repository.reviews.get_detail(created.id).await
    }

    /// Update a review; only its owner may do so, and only rating and
    /// comment are mutable. An explicitly provided zero rating or empty
    /// comment is applied; absent fields keep their prior value.
    pub async fn update(
        &self,
        requester_id: i32,
        id: i32,
        request: UpdateReview,
    ) -> AppResult<ReviewDetail> {
        self.check_owner(requester_id, id).await?;

        self.repository
            .reviews
            .update(id, request.rating, request.comment.as_deref())
            .await?;

        self.repository.reviews.get_detail(id).await
    }

    /// Delete a review; only its owner may do so
    pub async fn delete(&self, requester_id: i32, id: i32) -> AppResult<()> {
        self.check_owner(requester_id, id).await?;
        self.repository.reviews.delete(id).await
    }

    /// Owner check by integer identity. Admins get no special treatment
    /// for review mutation.
    async fn check_owner(&self, requester_id: i32, review_id: i32) -> AppResult<()> {
        let review = self.repository.reviews.get_by_id(review_id).await?;
        if review.user_id != requester_id {
            return Err(AppError::Authorization(
                "You must be the owner of this review".to_string(),
            ));
        }
        Ok(())
    }
}
