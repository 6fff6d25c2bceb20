//! Catalog Routers
//!
//! Movies and people are separate routers so the caller can guard them
//! differently.

use crate::application::config::CatalogConfig;
use crate::domain::repository::CatalogRepository;
use crate::infra::mysql::MySqlCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

fn state<R>(repo: R, config: CatalogConfig) -> CatalogAppState<R>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    CatalogAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    }
}

/// Create the movies router with MySQL repository
pub fn movies_router(repo: MySqlCatalogRepository, config: CatalogConfig) -> Router {
    movies_router_generic(repo, config)
}

/// Create the people router with MySQL repository
pub fn people_router(repo: MySqlCatalogRepository, config: CatalogConfig) -> Router {
    people_router_generic(repo, config)
}

/// Create a generic movies router for any repository implementation
pub fn movies_router_generic<R>(repo: R, config: CatalogConfig) -> Router
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/search", get(handlers::search_movies::<R>))
        .route("/data/{imdb_id}", get(handlers::get_movie::<R>))
        .with_state(state(repo, config))
}

/// Create a generic people router for any repository implementation
pub fn people_router_generic<R>(repo: R, config: CatalogConfig) -> Router
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/{id}", get(handlers::get_person::<R>))
        .with_state(state(repo, config))
}
