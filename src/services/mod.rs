//! Business logic services

pub mod auth;
pub mod catalog;
pub mod reviews;

use crate::{
    config::AuthConfig,
    error::AppResult,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub reviews: reviews::ReviewsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository.clone()),
            repository,
        }
    }

    /// Round-trip a trivial statement through the pool so readiness
    /// reflects actual database connectivity.
    pub async fn ping_database(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.repository.pool)
            .await?;
        Ok(())
    }
}
