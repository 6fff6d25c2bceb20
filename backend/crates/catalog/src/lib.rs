//! Catalog (Movie and Person Lookup) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Records, search value objects, parsing and pagination rules
//! - `application/` - Use cases
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! The catalogue is read-only: searches are paginated 100 rows at a time, and
//! detail lookups collapse the store's joined rows into one document.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use infra::{memory::InMemoryCatalogRepository, mysql::MySqlCatalogRepository};
pub use presentation::router::{
    movies_router, movies_router_generic, people_router, people_router_generic,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
