//! Search Movies Use Case

use std::sync::Arc;

use crate::application::config::CatalogConfig;
use crate::domain::entities::MovieSummary;
use crate::domain::repository::CatalogRepository;
use crate::domain::services::Pagination;
use crate::domain::value_objects::{MovieFilter, PageNumber};
use crate::error::CatalogResult;

/// Raw query values
#[derive(Debug, Clone, Default)]
pub struct SearchMoviesInput {
    pub title: Option<String>,
    pub year: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchMoviesOutput {
    pub data: Vec<MovieSummary>,
    pub pagination: Pagination,
}

/// Search Movies Use Case
pub struct SearchMoviesUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> SearchMoviesUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SearchMoviesInput) -> CatalogResult<SearchMoviesOutput> {
        let page = PageNumber::parse(input.page.as_deref())?;
        let filter = MovieFilter::parse(input.title, input.year.as_deref())?;

        let total = self.repo.count_movies(&filter).await?;
        let pagination = Pagination::new(total, page.get(), self.config.per_page);

        let data = if pagination.limit() == 0 {
            Vec::new()
        } else {
            self.repo
                .search_movies(&filter, pagination.from, pagination.limit())
                .await?
        };

        tracing::debug!(
            total = total,
            page = pagination.current_page,
            returned = data.len(),
            "Movie search"
        );

        Ok(SearchMoviesOutput { data, pagination })
    }
}
