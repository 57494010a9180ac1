//! Review endpoints: public reads, owner-gated writes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::review::{CreateReview, ReviewDetail, UpdateReview},
};

use super::AuthenticatedUser;

/// List all reviews, most recent first
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "reviews",
    responses(
        (status = 200, description = "List of reviews", body = Vec<ReviewDetail>)
    )
)]
pub async fn list_reviews(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ReviewDetail>>> {
    let reviews = state.services.reviews.list().await?;
    Ok(Json(reviews))
}

/// Get review by ID
#[utoipa::path(
    get,
    path = "/reviews/{id}",
    tag = "reviews",
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review details", body = ReviewDetail),
        (status = 404, description = "Review not found")
    )
)]
pub async fn get_review(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReviewDetail>> {
    let review = state.services.reviews.get(id).await?;
    Ok(Json(review))
}

/// Create a review; the owner is the authenticated user
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created", body = ReviewDetail),
        (status = 400, description = "Missing content_id or rating"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Referenced content does not exist")
    )
)]
pub async fn create_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<ReviewDetail>)> {
    let review = state
        .services
        .reviews
        .create(claims.user_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Update a review (owner only, partial)
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    request_body = UpdateReview,
    responses(
        (status = 200, description = "Review updated", body = ReviewDetail),
        (status = 403, description = "Not the owner of this review"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn update_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateReview>,
) -> AppResult<Json<ReviewDetail>> {
    let review = state
        .services
        .reviews
        .update(claims.user_id, id, request)
        .await?;
    Ok(Json(review))
}

/// Delete a review (owner only)
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Not the owner of this review"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn delete_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.reviews.delete(claims.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
