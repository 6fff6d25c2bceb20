//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::domain::entities::{MovieDetail, MovieSummary, Person, Principal, Rating, Role};
use crate::domain::services::Pagination;

/// Whole numbers serialize without a fractional part (`87`, not `87.0`)
fn json_number(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

// ============================================================================
// Search
// ============================================================================

/// GET /movies/search query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub year: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummaryResponse {
    pub title: String,
    pub year: Option<i64>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub imdb_rating: Option<Number>,
    pub rotten_tomatoes_rating: Option<Number>,
    pub metacritic_rating: Option<Number>,
    pub classification: Option<String>,
}

impl From<MovieSummary> for MovieSummaryResponse {
    fn from(movie: MovieSummary) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
            imdb_id: movie.imdb_id,
            imdb_rating: movie.imdb_rating.and_then(json_number),
            rotten_tomatoes_rating: movie.rotten_tomatoes_rating.and_then(json_number),
            metacritic_rating: movie.metacritic_rating.and_then(json_number),
            classification: movie.classification,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub data: Vec<MovieSummaryResponse>,
    pub pagination: Pagination,
}

// ============================================================================
// Movie
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PrincipalResponse {
    pub id: String,
    pub category: Option<String>,
    pub name: Option<String>,
    pub characters: Vec<String>,
}

impl From<Principal> for PrincipalResponse {
    fn from(principal: Principal) -> Self {
        Self {
            id: principal.id,
            category: principal.category,
            name: principal.name,
            characters: principal.characters,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingResponse {
    pub source: String,
    pub value: Option<Number>,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            source: rating.source,
            value: json_number(rating.value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieResponse {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub runtime: Option<i64>,
    pub genres: Vec<String>,
    pub country: Option<String>,
    pub principals: Vec<PrincipalResponse>,
    pub ratings: Vec<RatingResponse>,
    pub boxoffice: Option<i64>,
    pub poster: Option<String>,
    pub plot: Option<String>,
}

impl From<MovieDetail> for MovieResponse {
    fn from(movie: MovieDetail) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
            runtime: movie.runtime,
            genres: movie.genres,
            country: movie.country,
            principals: movie.principals.into_iter().map(Into::into).collect(),
            ratings: movie.ratings.into_iter().map(Into::into).collect(),
            boxoffice: movie.box_office,
            poster: movie.poster,
            plot: movie.plot,
        }
    }
}

// ============================================================================
// Person
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub movie_name: Option<String>,
    pub movie_id: String,
    pub category: Option<String>,
    pub characters: Vec<String>,
    pub imdb_rating: Option<Number>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            movie_name: role.movie_name,
            movie_id: role.movie_id,
            category: role.category,
            characters: role.characters,
            imdb_rating: role.imdb_rating.and_then(json_number),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub name: Option<String>,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
    pub roles: Vec<RoleResponse>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            name: person.name,
            birth_year: person.birth_year,
            death_year: person.death_year,
            roles: person.roles.into_iter().map(Into::into).collect(),
        }
    }
}
