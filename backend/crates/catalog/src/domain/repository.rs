//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{MovieRecord, MovieSummary, PersonRecord};
use crate::domain::value_objects::MovieFilter;
use crate::error::CatalogResult;

/// Catalogue repository trait
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// Count movies matching the filter
    async fn count_movies(&self, filter: &MovieFilter) -> CatalogResult<u64>;

    /// One page of matching movies, ordered by IMDb id
    async fn search_movies(
        &self,
        filter: &MovieFilter,
        offset: u64,
        limit: u64,
    ) -> CatalogResult<Vec<MovieSummary>>;

    /// Movie rows by IMDb id (`tt…`)
    async fn find_movie(&self, imdb_id: &str) -> CatalogResult<Option<MovieRecord>>;

    /// Person rows by IMDb name id (`nm…`)
    async fn find_person(&self, person_id: &str) -> CatalogResult<Option<PersonRecord>>;
}
