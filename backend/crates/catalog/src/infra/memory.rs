//! In-Memory Repository Implementation
//!
//! A fixed catalogue held in process, used by the router tests. Title
//! matching is case-insensitive like the default MySQL collation.

use std::collections::{BTreeMap, HashMap};

use crate::domain::entities::{MovieRecord, MovieSummary, PersonRecord};
use crate::domain::repository::CatalogRepository;
use crate::domain::value_objects::MovieFilter;
use crate::error::CatalogResult;

#[derive(Debug, Clone)]
struct StoredMovie {
    summary: MovieSummary,
    record: MovieRecord,
}

impl StoredMovie {
    fn matches(&self, filter: &MovieFilter) -> bool {
        let title_ok = filter.title.as_deref().is_none_or(|needle| {
            let needle = needle.to_lowercase();
            let original = self.record.basics.title.as_deref().unwrap_or_default();
            self.summary.title.to_lowercase().contains(&needle)
                || original.to_lowercase().contains(&needle)
        });
        let year_ok = filter
            .year
            .is_none_or(|year| self.summary.year == Some(year.get()));

        title_ok && year_ok
    }
}

/// Catalogue backed by in-process maps
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    /// Keyed by IMDb id, so iteration is in id order
    movies: BTreeMap<String, StoredMovie>,
    people: HashMap<String, PersonRecord>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie(mut self, summary: MovieSummary, record: MovieRecord) -> Self {
        self.movies
            .insert(summary.imdb_id.clone(), StoredMovie { summary, record });
        self
    }

    pub fn with_person(mut self, person_id: impl Into<String>, record: PersonRecord) -> Self {
        self.people.insert(person_id.into(), record);
        self
    }

    fn matching<'a>(&'a self, filter: &'a MovieFilter) -> impl Iterator<Item = &'a StoredMovie> {
        self.movies.values().filter(move |movie| movie.matches(filter))
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    async fn count_movies(&self, filter: &MovieFilter) -> CatalogResult<u64> {
        Ok(self.matching(filter).count() as u64)
    }

    async fn search_movies(
        &self,
        filter: &MovieFilter,
        offset: u64,
        limit: u64,
    ) -> CatalogResult<Vec<MovieSummary>> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self
            .matching(filter)
            .skip(offset)
            .take(limit)
            .map(|movie| movie.summary.clone())
            .collect())
    }

    async fn find_movie(&self, imdb_id: &str) -> CatalogResult<Option<MovieRecord>> {
        Ok(self.movies.get(imdb_id).map(|movie| movie.record.clone()))
    }

    async fn find_person(&self, person_id: &str) -> CatalogResult<Option<PersonRecord>> {
        Ok(self.people.get(person_id).cloned())
    }
}
