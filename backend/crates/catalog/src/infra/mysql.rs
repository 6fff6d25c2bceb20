//! MySQL Repository Implementation
//!
//! Reads the `basics`, `principals`, `ratings` and `names` tables. Numeric
//! columns are cast in SQL so that decoding does not depend on the exact
//! column types of a given import.

use sqlx::MySqlPool;

use crate::domain::entities::{
    MovieBasics, MovieRecord, MovieSummary, PersonRecord, PrincipalRow, RatingRow, RoleRow,
};
use crate::domain::repository::CatalogRepository;
use crate::domain::services::nonzero_rating;
use crate::domain::value_objects::MovieFilter;
use crate::error::CatalogResult;

/// MySQL-backed catalogue repository
#[derive(Clone)]
pub struct MySqlCatalogRepository {
    pool: MySqlPool,
}

impl MySqlCatalogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const FILTER_CLAUSE: &str = r#"
    WHERE (? IS NULL OR primaryTitle LIKE CONCAT('%', ?, '%') OR originalTitle LIKE CONCAT('%', ?, '%'))
      AND (? IS NULL OR year = ?)
"#;

impl CatalogRepository for MySqlCatalogRepository {
    async fn count_movies(&self, filter: &MovieFilter) -> CatalogResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM basics {FILTER_CLAUSE}");
        let title = filter.title.as_deref();
        let year = filter.year.map(|y| y.get());

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(title)
            .bind(title)
            .bind(title)
            .bind(year)
            .bind(year)
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn search_movies(
        &self,
        filter: &MovieFilter,
        offset: u64,
        limit: u64,
    ) -> CatalogResult<Vec<MovieSummary>> {
        let sql = format!(
            r#"
            SELECT
                primaryTitle AS title,
                CAST(year AS SIGNED) AS year,
                tconst AS imdb_id,
                CAST(imdbRating AS DOUBLE) AS imdb_rating,
                CAST(rottentomatoesrating AS DOUBLE) AS rotten_tomatoes_rating,
                CAST(metacriticRating AS DOUBLE) AS metacritic_rating,
                rated AS classification
            FROM basics
            {FILTER_CLAUSE}
            ORDER BY tconst ASC
            LIMIT ? OFFSET ?
            "#
        );
        let title = filter.title.as_deref();
        let year = filter.year.map(|y| y.get());

        let rows = sqlx::query_as::<_, SummaryRow>(&sql)
            .bind(title)
            .bind(title)
            .bind(title)
            .bind(year)
            .bind(year)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(SummaryRow::into_summary).collect())
    }

    async fn find_movie(&self, imdb_id: &str) -> CatalogResult<Option<MovieRecord>> {
        let basics = sqlx::query_as::<_, BasicsRow>(
            r#"
            SELECT
                originalTitle AS title,
                CAST(year AS SIGNED) AS year,
                CAST(runtimeMinutes AS SIGNED) AS runtime,
                genres,
                country,
                CAST(boxoffice AS SIGNED) AS box_office,
                poster,
                plot
            FROM basics
            WHERE tconst = ?
            "#,
        )
        .bind(imdb_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(basics) = basics else {
            return Ok(None);
        };

        let principals = sqlx::query_as::<_, PrincipalDbRow>(
            r#"
            SELECT
                CAST(id AS SIGNED) AS row_id,
                nconst AS person_id,
                category,
                name,
                characters
            FROM principals
            WHERE tconst = ?
            ORDER BY id ASC
            "#,
        )
        .bind(imdb_id)
        .fetch_all(&self.pool)
        .await?;

        let ratings = sqlx::query_as::<_, RatingDbRow>(
            "SELECT source, value FROM ratings WHERE tconst = ?",
        )
        .bind(imdb_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(MovieRecord {
            basics: basics.into(),
            principals: principals.into_iter().map(Into::into).collect(),
            ratings: ratings.into_iter().map(Into::into).collect(),
        }))
    }

    async fn find_person(&self, person_id: &str) -> CatalogResult<Option<PersonRecord>> {
        let person = sqlx::query_as::<_, NameRow>(
            r#"
            SELECT
                primaryName AS name,
                CAST(birthYear AS SIGNED) AS birth_year,
                CAST(deathYear AS SIGNED) AS death_year
            FROM names
            WHERE nconst = ?
            "#,
        )
        .bind(person_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(person) = person else {
            return Ok(None);
        };

        let roles = sqlx::query_as::<_, RoleDbRow>(
            r#"
            SELECT
                basics.originalTitle AS movie_name,
                principals.tconst AS movie_id,
                principals.category AS category,
                principals.characters AS characters,
                CAST(basics.imdbRating AS DOUBLE) AS imdb_rating
            FROM principals
            LEFT JOIN basics ON basics.tconst = principals.tconst
            WHERE principals.nconst = ?
            ORDER BY principals.id ASC
            "#,
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(PersonRecord {
            name: person.name,
            birth_year: person.birth_year,
            death_year: person.death_year,
            roles: roles.into_iter().map(Into::into).collect(),
        }))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct SummaryRow {
    title: Option<String>,
    year: Option<i64>,
    imdb_id: String,
    imdb_rating: Option<f64>,
    rotten_tomatoes_rating: Option<f64>,
    metacritic_rating: Option<f64>,
    classification: Option<String>,
}

impl SummaryRow {
    fn into_summary(self) -> MovieSummary {
        MovieSummary {
            title: self.title.unwrap_or_default(),
            year: self.year,
            imdb_id: self.imdb_id,
            imdb_rating: self.imdb_rating,
            rotten_tomatoes_rating: self.rotten_tomatoes_rating,
            metacritic_rating: nonzero_rating(self.metacritic_rating),
            classification: self.classification,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BasicsRow {
    title: Option<String>,
    year: Option<i64>,
    runtime: Option<i64>,
    genres: Option<String>,
    country: Option<String>,
    box_office: Option<i64>,
    poster: Option<String>,
    plot: Option<String>,
}

impl From<BasicsRow> for MovieBasics {
    fn from(row: BasicsRow) -> Self {
        Self {
            title: row.title,
            year: row.year,
            runtime: row.runtime,
            genres: row.genres,
            country: row.country,
            box_office: row.box_office,
            poster: row.poster,
            plot: row.plot,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PrincipalDbRow {
    row_id: i64,
    person_id: String,
    category: Option<String>,
    name: Option<String>,
    characters: Option<String>,
}

impl From<PrincipalDbRow> for PrincipalRow {
    fn from(row: PrincipalDbRow) -> Self {
        Self {
            row_id: row.row_id,
            person_id: row.person_id,
            category: row.category,
            name: row.name,
            characters: row.characters,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RatingDbRow {
    source: Option<String>,
    value: Option<String>,
}

impl From<RatingDbRow> for RatingRow {
    fn from(row: RatingDbRow) -> Self {
        Self {
            source: row.source,
            value: row.value,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NameRow {
    name: Option<String>,
    birth_year: Option<i64>,
    death_year: Option<i64>,
}

#[derive(sqlx::FromRow)]
struct RoleDbRow {
    movie_name: Option<String>,
    movie_id: String,
    category: Option<String>,
    characters: Option<String>,
    imdb_rating: Option<f64>,
}

impl From<RoleDbRow> for RoleRow {
    fn from(row: RoleDbRow) -> Self {
        Self {
            movie_name: row.movie_name,
            movie_id: row.movie_id,
            category: row.category,
            characters: row.characters,
            imdb_rating: row.imdb_rating,
        }
    }
}
