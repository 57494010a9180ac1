//! Catalogue management service for authors, categories and content

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        category::{Category, CreateCategory, UpdateCategory},
        content::{parse_published, Content, ContentDetail, CreateContent, UpdateContent},
    },
    repository::{
        content::{ContentChanges, NewContent},
        Repository,
    },
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // Authors

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    pub async fn create_author(&self, request: CreateAuthor) -> AppResult<Author> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.authors.create(&request.name).await
    }

    pub async fn update_author(&self, id: i32, request: UpdateAuthor) -> AppResult<Author> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository
            .authors
            .update(id, request.name.as_deref())
            .await
    }

    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }

    // Categories

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await
    }

    pub async fn create_category(&self, request: CreateCategory) -> AppResult<Category> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.categories.create(&request.name).await
    }

    pub async fn update_category(&self, id: i32, request: UpdateCategory) -> AppResult<Category> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository
            .categories
            .update(id, request.name.as_deref())
            .await
    }

    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        self.repository.categories.delete(id).await
    }

    // Content

    /// List every content row with its author, category and reviews
    /// attached, the same shape the single-item endpoint returns.
    pub async fn list_content(&self) -> AppResult<Vec<ContentDetail>> {
        let rows = self.repository.content.list().await?;
        let mut details = Vec::with_capacity(rows.len());
        for content in rows {
            details.push(self.resolve_detail(content).await?);
        }
        Ok(details)
    }

    pub async fn get_content(&self, id: i32) -> AppResult<ContentDetail> {
        let content = self.repository.content.get_by_id(id).await?;
        self.resolve_detail(content).await
    }

    /// Create a content row. Both foreign keys must be provided and must
    /// resolve to existing rows; the publication date must be YYYY-MM-DD.
    pub async fn create_content(&self, request: CreateContent) -> AppResult<ContentDetail> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let title = request
            .title
            .ok_or_else(|| AppError::Validation("title must be provided".to_string()))?;
        let description = request
            .description
            .ok_or_else(|| AppError::Validation("description must be provided".to_string()))?;

        let (category_id, author_id) = match (request.category_id, request.author_id) {
            (Some(c), Some(a)) => (c, a),
            _ => {
                return Err(AppError::Validation(
                    "Both category_id and author_id must be provided when creating content"
                        .to_string(),
                ))
            }
        };
        self.check_references(Some(category_id), Some(author_id))
            .await?;

        let published = request.published.as_deref().map(parse_published).transpose()?;

        let content = self
            .repository
            .content
            .create(&NewContent {
                title,
                genre: request.genre,
                description,
                published,
                publisher: request.publisher,
                author_id,
                category_id,
            })
            .await?;

        self.resolve_detail(content).await
    }

    /// Partially update a content row; supplied foreign keys must resolve
    pub async fn update_content(&self, id: i32, request: UpdateContent) -> AppResult<ContentDetail> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // 404 before 400 when the row itself is gone
        self.repository.content.get_by_id(id).await?;

        self.check_references(request.category_id, request.author_id)
            .await?;

        let published = request.published.as_deref().map(parse_published).transpose()?;

        let content = self
            .repository
            .content
            .update(
                id,
                &ContentChanges {
                    title: request.title,
                    genre: request.genre,
                    description: request.description,
                    published,
                    publisher: request.publisher,
                    author_id: request.author_id,
                    category_id: request.category_id,
                },
            )
            .await?;

        self.resolve_detail(content).await
    }

    pub async fn delete_content(&self, id: i32) -> AppResult<()> {
        self.repository.content.delete(id).await
    }

    /// Verify that supplied category/author references resolve
    async fn check_references(
        &self,
        category_id: Option<i32>,
        author_id: Option<i32>,
    ) -> AppResult<()> {
        if let Some(category_id) = category_id {
            if !self.repository.categories.exists(category_id).await? {
                return Err(AppError::Validation(format!(
                    "Category with id {} does not exist",
                    category_id
                )));
            }
        }
        if let Some(author_id) = author_id {
            if !self.repository.authors.exists(author_id).await? {
                return Err(AppError::Validation(format!(
                    "Author with id {} does not exist",
                    author_id
                )));
            }
        }
        Ok(())
    }

    /// Attach the author, category and reviews to a content row
    async fn resolve_detail(&self, content: Content) -> AppResult<ContentDetail> {
        let author = self.repository.authors.get_by_id(content.author_id).await?;
        let category = self
            .repository
            .categories
            .get_by_id(content.category_id)
            .await?;
        let reviews = self.repository.reviews.list_for_content(content.id).await?;

        Ok(ContentDetail {
            id: content.id,
            title: content.title,
            genre: content.genre,
            description: content.description,
            published: content.published,
            publisher: content.publisher,
            author,
            category,
            reviews,
        })
    }
}
