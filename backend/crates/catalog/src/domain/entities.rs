//! Domain Entities
//!
//! Raw records as read from the store, and the assembled movie and person
//! views returned to callers. The catalogue is read-only.

/// One search hit
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    /// Primary title
    pub title: String,
    pub year: Option<i64>,
    pub imdb_id: String,
    pub imdb_rating: Option<f64>,
    pub rotten_tomatoes_rating: Option<f64>,
    /// `None` when the store holds no score (or zero)
    pub metacritic_rating: Option<f64>,
    pub classification: Option<String>,
}

// ============================================================================
// Movie
// ============================================================================

/// A movie's rows as stored, before de-duplication and parsing
#[derive(Debug, Clone, Default)]
pub struct MovieRecord {
    pub basics: MovieBasics,
    pub principals: Vec<PrincipalRow>,
    pub ratings: Vec<RatingRow>,
}

#[derive(Debug, Clone, Default)]
pub struct MovieBasics {
    /// Original title
    pub title: Option<String>,
    pub year: Option<i64>,
    /// Minutes
    pub runtime: Option<i64>,
    /// Comma-separated
    pub genres: Option<String>,
    pub country: Option<String>,
    pub box_office: Option<i64>,
    pub poster: Option<String>,
    pub plot: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PrincipalRow {
    /// Store row id, unique per credit
    pub row_id: i64,
    pub person_id: String,
    pub category: Option<String>,
    pub name: Option<String>,
    /// JSON array text, e.g. `["Neo"]`
    pub characters: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RatingRow {
    pub source: Option<String>,
    /// Display text, e.g. `7.9/10` or `87%`
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub runtime: Option<i64>,
    pub genres: Vec<String>,
    pub country: Option<String>,
    pub principals: Vec<Principal>,
    pub ratings: Vec<Rating>,
    pub box_office: Option<i64>,
    pub poster: Option<String>,
    pub plot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub category: Option<String>,
    pub name: Option<String>,
    pub characters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub source: String,
    pub value: f64,
}

// ============================================================================
// Person
// ============================================================================

/// A person's rows as stored
#[derive(Debug, Clone, Default)]
pub struct PersonRecord {
    pub name: Option<String>,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
    pub roles: Vec<RoleRow>,
}

#[derive(Debug, Clone)]
pub struct RoleRow {
    pub movie_name: Option<String>,
    pub movie_id: String,
    pub category: Option<String>,
    /// JSON array text
    pub characters: Option<String>,
    pub imdb_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: Option<String>,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub movie_name: Option<String>,
    pub movie_id: String,
    pub category: Option<String>,
    pub characters: Vec<String>,
    pub imdb_rating: Option<f64>,
}
