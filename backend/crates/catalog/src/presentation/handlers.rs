//! HTTP Handlers

use crate::application::config::CatalogConfig;
use crate::application::{GetMovieUseCase, GetPersonUseCase, SearchMoviesInput, SearchMoviesUseCase};
use crate::domain::repository::CatalogRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{MovieResponse, PersonResponse, SearchQuery, SearchResponse};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, RawQuery, State};
use std::sync::Arc;

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<CatalogConfig>,
}

/// Reject any query string, naming its parameters
fn ensure_no_query(raw: Option<&str>) -> CatalogResult<()> {
    let mut names: Vec<&str> = Vec::new();
    for pair in raw.unwrap_or_default().split('&').filter(|p| !p.is_empty()) {
        let name = pair.split_once('=').map_or(pair, |(name, _)| name);
        if !names.contains(&name) {
            names.push(name);
        }
    }

    if names.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::QueryNotPermitted(names.join(", ")))
    }
}

/// GET /movies/search
pub async fn search_movies<R>(
    State(state): State<CatalogAppState<R>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> CatalogResult<Json<SearchResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable search query");
        CatalogError::MalformedQuery
    })?;

    let use_case = SearchMoviesUseCase::new(state.repo.clone(), state.config.clone());

    let input = SearchMoviesInput {
        title: query.title,
        year: query.year,
        page: query.page,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(SearchResponse {
        data: output.data.into_iter().map(Into::into).collect(),
        pagination: output.pagination,
    }))
}

/// GET /movies/data/{imdbID}
pub async fn get_movie<R>(
    State(state): State<CatalogAppState<R>>,
    Path(imdb_id): Path<String>,
    RawQuery(query): RawQuery,
) -> CatalogResult<Json<MovieResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    ensure_no_query(query.as_deref())?;

    let movie = GetMovieUseCase::new(state.repo.clone())
        .execute(&imdb_id)
        .await?;

    Ok(Json(movie.into()))
}

/// GET /people/{id}
pub async fn get_person<R>(
    State(state): State<CatalogAppState<R>>,
    Path(person_id): Path<String>,
    RawQuery(query): RawQuery,
) -> CatalogResult<Json<PersonResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    ensure_no_query(query.as_deref())?;

    let person = GetPersonUseCase::new(state.repo.clone())
        .execute(&person_id)
        .await?;

    Ok(Json(person.into()))
}
