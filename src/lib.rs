//! Critica Review Catalogue Server
//!
//! A REST JSON API for a review catalogue: users register and review
//! catalogued content (books and other media), while administrators
//! maintain the author, category and content reference data.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
