//! Domain Services
//!
//! Pure functions: rating text parsing, record assembly and pagination.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::entities::{
    MovieDetail, MovieRecord, Person, PersonRecord, Principal, Rating, Role,
};

// ============================================================================
// Ratings
// ============================================================================

static PERCENTAGE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(\d+)%").ok());

static FRACTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)/\d+").ok());

/// Parse a rating's display text into a number
///
/// `"87%"` is 87 and `"7.9/10"` is 7.9; a percentage wins when both forms
/// appear. Anything else has no numeric value.
pub fn parse_rating_value(value: &str) -> Option<f64> {
    let percentage = PERCENTAGE
        .as_ref()
        .and_then(|re| re.captures(value))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());
    if percentage.is_some() {
        return percentage;
    }

    FRACTION
        .as_ref()
        .and_then(|re| re.captures(value))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Metacritic stores zero for "no score"
pub fn nonzero_rating(rating: Option<f64>) -> Option<f64> {
    rating.filter(|r| *r != 0.0)
}

// ============================================================================
// Record assembly
// ============================================================================

/// Decode a stored JSON array of character names
///
/// Missing or unreadable text yields no characters.
pub fn parse_characters(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Vec::new();
    };

    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, characters = raw, "Unreadable characters column");
        Vec::new()
    })
}

pub fn split_genres(raw: Option<&str>) -> Vec<String> {
    raw.filter(|g| !g.is_empty())
        .map(|g| g.split(',').map(str::to_owned).collect())
        .unwrap_or_default()
}

/// Collapse duplicate credits and ratings, and parse the text columns
pub fn assemble_movie(record: MovieRecord) -> MovieDetail {
    let MovieRecord {
        basics,
        principals,
        ratings,
    } = record;

    let mut seen_credits = HashSet::new();
    let principals = principals
        .into_iter()
        .filter(|row| seen_credits.insert(row.row_id))
        .map(|row| Principal {
            characters: parse_characters(row.characters.as_deref()),
            id: row.person_id,
            category: row.category,
            name: row.name,
        })
        .collect();

    // First row per source decides; an unparsable first row drops the source
    let mut seen_sources = HashSet::new();
    let ratings = ratings
        .into_iter()
        .filter_map(|row| match (row.source, row.value) {
            (Some(source), Some(value)) if !source.is_empty() && !value.is_empty() => {
                Some((source, value))
            }
            _ => None,
        })
        .filter(|(source, _)| seen_sources.insert(source.clone()))
        .filter_map(|(source, value)| {
            parse_rating_value(&value).map(|value| Rating { source, value })
        })
        .collect();

    MovieDetail {
        genres: split_genres(basics.genres.as_deref()),
        title: basics.title,
        year: basics.year,
        runtime: basics.runtime,
        country: basics.country,
        principals,
        ratings,
        box_office: basics.box_office,
        poster: basics.poster,
        plot: basics.plot,
    }
}

pub fn assemble_person(record: PersonRecord) -> Person {
    let roles = record
        .roles
        .into_iter()
        .map(|row| Role {
            characters: parse_characters(row.characters.as_deref()),
            movie_name: row.movie_name,
            movie_id: row.movie_id,
            category: row.category,
            imdb_rating: row.imdb_rating,
        })
        .collect();

    Person {
        name: record.name,
        birth_year: record.birth_year,
        death_year: record.death_year,
        roles,
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Page metadata for a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub last_page: u64,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,
    pub per_page: u64,
    pub current_page: u64,
    /// Zero-based index of the first row on this page
    pub from: u64,
    /// Zero-based index one past the last row on this page
    pub to: u64,
}

impl Pagination {
    pub fn new(total: u64, current_page: u64, per_page: u64) -> Self {
        let per_page = per_page.max(1);
        let last_page = total.div_ceil(per_page);
        let from = current_page.saturating_sub(1).saturating_mul(per_page);
        let to = from.saturating_add(per_page).min(total).max(from);

        Self {
            total,
            last_page,
            prev_page: (current_page > 1).then(|| current_page - 1),
            next_page: (current_page < last_page).then(|| current_page + 1),
            per_page,
            current_page,
            from,
            to,
        }
    }

    /// Rows to fetch for this page
    pub fn limit(&self) -> u64 {
        self.to - self.from
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MovieBasics, PrincipalRow, RatingRow, RoleRow};

    #[test]
    fn test_parse_rating_value() {
        assert_eq!(parse_rating_value("87%"), Some(87.0));
        assert_eq!(parse_rating_value("7.9/10"), Some(7.9));
        assert_eq!(parse_rating_value("73/100"), Some(73.0));
        assert_eq!(parse_rating_value("N/A"), None);
        assert_eq!(parse_rating_value(""), None);
        assert_eq!(parse_rating_value("great"), None);
        assert_eq!(parse_rating_value("Score: 91%"), Some(91.0));
    }

    #[test]
    fn test_nonzero_rating() {
        assert_eq!(nonzero_rating(Some(0.0)), None);
        assert_eq!(nonzero_rating(None), None);
        assert_eq!(nonzero_rating(Some(73.0)), Some(73.0));
    }

    #[test]
    fn test_parse_characters() {
        assert_eq!(parse_characters(Some(r#"["Neo","Thomas Anderson"]"#)), vec![
            "Neo".to_string(),
            "Thomas Anderson".to_string()
        ]);
        assert!(parse_characters(None).is_empty());
        assert!(parse_characters(Some("")).is_empty());
        assert!(parse_characters(Some("not json")).is_empty());
    }

    #[test]
    fn test_split_genres() {
        assert_eq!(split_genres(Some("Action,Sci-Fi")), vec!["Action", "Sci-Fi"]);
        assert!(split_genres(None).is_empty());
        assert!(split_genres(Some("")).is_empty());
    }

    fn principal(row_id: i64, person_id: &str) -> PrincipalRow {
        PrincipalRow {
            row_id,
            person_id: person_id.to_string(),
            category: Some("actor".to_string()),
            name: Some(person_id.to_uppercase()),
            characters: Some(r#"["Someone"]"#.to_string()),
        }
    }

    fn rating(source: &str, value: &str) -> RatingRow {
        RatingRow {
            source: Some(source.to_string()),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn test_assemble_movie() {
        let record = MovieRecord {
            basics: MovieBasics {
                title: Some("The Matrix".to_string()),
                year: Some(1999),
                genres: Some("Action,Sci-Fi".to_string()),
                ..Default::default()
            },
            principals: vec![principal(1, "nm1"), principal(1, "nm1"), principal(2, "nm2")],
            ratings: vec![
                rating("Internet Movie Database", "8.7/10"),
                rating("Rotten Tomatoes", "88%"),
                rating("Rotten Tomatoes", "12%"),
                rating("Metacritic", "N/A"),
                RatingRow {
                    source: None,
                    value: Some("5/10".to_string()),
                },
            ],
        };

        let detail = assemble_movie(record);
        assert_eq!(detail.title.as_deref(), Some("The Matrix"));
        assert_eq!(detail.genres, vec!["Action", "Sci-Fi"]);
        assert_eq!(detail.principals.len(), 2);
        assert_eq!(detail.principals[0].id, "nm1");
        assert_eq!(detail.principals[0].characters, vec!["Someone"]);
        assert_eq!(detail.ratings, vec![
            Rating {
                source: "Internet Movie Database".to_string(),
                value: 8.7
            },
            Rating {
                source: "Rotten Tomatoes".to_string(),
                value: 88.0
            },
        ]);
    }

    #[test]
    fn test_assemble_person() {
        let person = assemble_person(PersonRecord {
            name: Some("Keanu Reeves".to_string()),
            birth_year: Some(1964),
            death_year: None,
            roles: vec![RoleRow {
                movie_name: Some("The Matrix".to_string()),
                movie_id: "tt0133093".to_string(),
                category: Some("actor".to_string()),
                characters: Some(r#"["Neo"]"#.to_string()),
                imdb_rating: Some(8.7),
            }],
        });

        assert_eq!(person.name.as_deref(), Some("Keanu Reeves"));
        assert_eq!(person.roles.len(), 1);
        assert_eq!(person.roles[0].characters, vec!["Neo"]);
    }

    #[test]
    fn test_pagination_first_page() {
        let page = Pagination::new(250, 1, 100);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.prev_page, None);
        assert_eq!(page.next_page, Some(2));
        assert_eq!((page.from, page.to), (0, 100));
        assert_eq!(page.limit(), 100);
    }

    #[test]
    fn test_pagination_last_page() {
        let page = Pagination::new(250, 3, 100);
        assert_eq!(page.prev_page, Some(2));
        assert_eq!(page.next_page, None);
        assert_eq!((page.from, page.to), (200, 250));
        assert_eq!(page.limit(), 50);
    }

    #[test]
    fn test_pagination_past_end() {
        let page = Pagination::new(250, 5, 100);
        assert_eq!(page.prev_page, Some(4));
        assert_eq!(page.next_page, None);
        assert_eq!((page.from, page.to), (400, 400));
        assert_eq!(page.limit(), 0);
    }

    #[test]
    fn test_pagination_empty() {
        let page = Pagination::new(0, 1, 100);
        assert_eq!(page.last_page, 0);
        assert_eq!(page.prev_page, None);
        assert_eq!(page.next_page, None);
        assert_eq!((page.from, page.to), (0, 0));
    }
}
