//! Get Person Use Case

use std::sync::Arc;

use crate::domain::entities::Person;
use crate::domain::repository::CatalogRepository;
use crate::domain::services::assemble_person;
use crate::error::{CatalogError, CatalogResult};

pub struct GetPersonUseCase<R>
where
    R: CatalogRepository,
{
    repo: Arc<R>,
}

impl<R> GetPersonUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, person_id: &str) -> CatalogResult<Person> {
        let record = self
            .repo
            .find_person(person_id)
            .await?
            .ok_or(CatalogError::PersonNotFound)?;

        Ok(assemble_person(record))
    }
}
