//! Content endpoints: public reads, admin-gated writes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::content::{ContentDetail, CreateContent, UpdateContent},
};

use super::AuthenticatedUser;

/// List all content with author, category and reviews resolved
#[utoipa::path(
    get,
    path = "/content",
    tag = "content",
    responses(
        (status = 200, description = "List of content", body = Vec<ContentDetail>)
    )
)]
pub async fn list_content(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ContentDetail>>> {
    let content = state.services.catalog.list_content().await?;
    Ok(Json(content))
}

/// Get content by ID with author, category and reviews resolved
#[utoipa::path(
    get,
    path = "/content/{id}",
    tag = "content",
    params(("id" = i32, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Content details", body = ContentDetail),
        (status = 404, description = "Content not found")
    )
)]
pub async fn get_content(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ContentDetail>> {
    let content = state.services.catalog.get_content(id).await?;
    Ok(Json(content))
}

/// Create new content (admin only)
#[utoipa::path(
    post,
    path = "/content",
    tag = "content",
    security(("bearer_auth" = [])),
    request_body = CreateContent,
    responses(
        (status = 201, description = "Content created", body = ContentDetail),
        (status = 400, description = "Invalid input or unresolvable references"),
        (status = 403, description = "Administrator privileges required")
    )
)]
pub async fn create_content(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateContent>,
) -> AppResult<(StatusCode, Json<ContentDetail>)> {
    state.services.auth.require_admin(claims.user_id).await?;

    let content = state.services.catalog.create_content(request).await?;
    Ok((StatusCode::CREATED, Json(content)))
}

/// Update content (admin only, partial)
#[utoipa::path(
    put,
    path = "/content/{id}",
    tag = "content",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Content ID")),
    request_body = UpdateContent,
    responses(
        (status = 200, description = "Content updated", body = ContentDetail),
        (status = 400, description = "Invalid input or unresolvable references"),
        (status = 403, description = "Administrator privileges required"),
        (status = 404, description = "Content not found")
    )
)]
pub async fn update_content(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateContent>,
) -> AppResult<Json<ContentDetail>> {
    state.services.auth.require_admin(claims.user_id).await?;

    let content = state.services.catalog.update_content(id, request).await?;
    Ok(Json(content))
}

/// Delete content (admin only); dependent reviews are cascaded
#[utoipa::path(
    delete,
    path = "/content/{id}",
    tag = "content",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Content ID")),
    responses(
        (status = 204, description = "Content deleted"),
        (status = 403, description = "Administrator privileges required"),
        (status = 404, description = "Content not found")
    )
)]
pub async fn delete_content(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.auth.require_admin(claims.user_id).await?;

    state.services.catalog.delete_content(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
