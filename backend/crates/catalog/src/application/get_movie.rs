//! Get Movie Use Case

use std::sync::Arc;

use crate::domain::entities::MovieDetail;
use crate::domain::repository::CatalogRepository;
use crate::domain::services::assemble_movie;
use crate::error::{CatalogError, CatalogResult};

pub struct GetMovieUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> GetMovieUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, imdb_id: &str) -> CatalogResult<MovieDetail> {
        let record = self
            .repo
            .find_movie(imdb_id)
            .await?
            .ok_or(CatalogError::MovieNotFound)?;

        Ok(assemble_movie(record))
    }
}
