//! Unit tests for Catalog crate
//! Router-level behaviour against the in-memory catalogue.

#[cfg(test)]
mod support {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::application::config::CatalogConfig;
    use crate::domain::entities::{
        MovieBasics, MovieRecord, MovieSummary, PersonRecord, PrincipalRow, RatingRow, RoleRow,
    };
    use crate::infra::memory::InMemoryCatalogRepository;

    pub fn summary(imdb_id: &str, title: &str, year: i64) -> MovieSummary {
        MovieSummary {
            title: title.to_string(),
            year: Some(year),
            imdb_id: imdb_id.to_string(),
            imdb_rating: Some(7.5),
            rotten_tomatoes_rating: Some(80.0),
            metacritic_rating: None,
            classification: Some("PG".to_string()),
        }
    }

    fn record(original_title: &str, year: i64) -> MovieRecord {
        MovieRecord {
            basics: MovieBasics {
                title: Some(original_title.to_string()),
                year: Some(year),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn matrix() -> (MovieSummary, MovieRecord) {
        let summary = MovieSummary {
            metacritic_rating: Some(73.0),
            ..summary("tt0133093", "The Matrix", 1999)
        };
        let record = MovieRecord {
            basics: MovieBasics {
                title: Some("The Matrix".to_string()),
                year: Some(1999),
                runtime: Some(136),
                genres: Some("Action,Sci-Fi".to_string()),
                country: Some("United States".to_string()),
                box_office: Some(171_479_930),
                poster: Some("https://example.com/matrix.jpg".to_string()),
                plot: Some("A hacker learns the truth.".to_string()),
            },
            principals: vec![
                PrincipalRow {
                    row_id: 1,
                    person_id: "nm0000206".to_string(),
                    category: Some("actor".to_string()),
                    name: Some("Keanu Reeves".to_string()),
                    characters: Some(r#"["Neo"]"#.to_string()),
                },
                PrincipalRow {
                    row_id: 2,
                    person_id: "nm0905154".to_string(),
                    category: Some("director".to_string()),
                    name: Some("Lana Wachowski".to_string()),
                    characters: None,
                },
            ],
            ratings: vec![
                RatingRow {
                    source: Some("Internet Movie Database".to_string()),
                    value: Some("8.7/10".to_string()),
                },
                RatingRow {
                    source: Some("Rotten Tomatoes".to_string()),
                    value: Some("88%".to_string()),
                },
            ],
        };
        (summary, record)
    }

    pub fn repo() -> InMemoryCatalogRepository {
        let (matrix_summary, matrix_record) = matrix();
        let mut repo = InMemoryCatalogRepository::new().with_movie(matrix_summary, matrix_record);

        // 150 filler titles in 2001, ids sorting after the Matrix
        for i in 0..150 {
            let id = format!("tt9{i:06}");
            let title = format!("Filler {i}");
            repo = repo.with_movie(summary(&id, &title, 2001), record(&title, 2001));
        }

        // Primary and original titles differ
        repo = repo.with_movie(
            summary("tt0245429", "Spirited Away", 2001),
            record("Sen to Chihiro no kamikakushi", 2001),
        );

        repo.with_person(
            "nm0000206",
            PersonRecord {
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
            },
        )
    }

    pub fn movies() -> Router {
        crate::movies_router_generic(repo(), CatalogConfig::default())
    }

    pub fn people() -> Router {
        crate::people_router_generic(repo(), CatalogConfig::default())
    }

    pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        get_with(router, uri, None).await
    }

    pub async fn get_with(
        router: Router,
        uri: &str,
        authorization: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let req = builder.body(Body::empty()).unwrap();
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

#[cfg(test)]
mod search_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_search_by_title() {
        let (status, body) = get(movies(), "/search?title=matrix").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!([{
                "title": "The Matrix",
                "year": 1999,
                "imdbID": "tt0133093",
                "imdbRating": 7.5,
                "rottenTomatoesRating": 80,
                "metacriticRating": 73,
                "classification": "PG"
            }])
        );
        assert_eq!(
            body["pagination"],
            json!({
                "total": 1,
                "lastPage": 1,
                "prevPage": null,
                "nextPage": null,
                "perPage": 100,
                "currentPage": 1,
                "from": 0,
                "to": 1
            })
        );
    }

    #[tokio::test]
    async fn test_search_matches_original_title() {
        let (_, body) = get(movies(), "/search?title=Chihiro").await;
        assert_eq!(body["data"][0]["title"], "Spirited Away");
        assert_eq!(body["data"][0]["metacriticRating"], json!(null));
    }

    #[tokio::test]
    async fn test_search_paginates_by_hundred() {
        let (status, body) = get(movies(), "/search?year=2001&page=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["total"], 151);
        assert_eq!(body["pagination"]["lastPage"], 2);
        assert_eq!(body["pagination"]["prevPage"], 1);
        assert_eq!(body["pagination"]["nextPage"], json!(null));
        assert_eq!(body["pagination"]["from"], 100);
        assert_eq!(body["pagination"]["to"], 151);
        assert_eq!(body["data"].as_array().unwrap().len(), 51);
    }

    #[tokio::test]
    async fn test_search_orders_by_id() {
        let (_, body) = get(movies(), "/search").await;
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["imdbID"].as_str().unwrap())
            .collect();

        assert_eq!(ids.len(), 100);
        assert_eq!(ids[0], "tt0133093");
        assert_eq!(ids[1], "tt0245429");
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_search_rejects_bad_page() {
        for uri in ["/search?page=abc", "/search?page=1.5", "/search?page=-1", "/search?page=0"] {
            let (status, body) = get(movies(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                body,
                json!({"error": true, "message": "Invalid page format. page must be a number."})
            );
        }
    }

    #[tokio::test]
    async fn test_search_rejects_bad_year() {
        for uri in ["/search?year=99", "/search?year=19999", "/search?year=abcd"] {
            let (status, body) = get(movies(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["message"], "Invalid year format. Format must be yyyy.");
        }
    }
}

#[cfg(test)]
mod movie_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_get_movie() {
        let (status, body) = get(movies(), "/data/tt0133093").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "title": "The Matrix",
                "year": 1999,
                "runtime": 136,
                "genres": ["Action", "Sci-Fi"],
                "country": "United States",
                "principals": [
                    {"id": "nm0000206", "category": "actor", "name": "Keanu Reeves", "characters": ["Neo"]},
                    {"id": "nm0905154", "category": "director", "name": "Lana Wachowski", "characters": []}
                ],
                "ratings": [
                    {"source": "Internet Movie Database", "value": 8.7},
                    {"source": "Rotten Tomatoes", "value": 88}
                ],
                "boxoffice": 171_479_930,
                "poster": "https://example.com/matrix.jpg",
                "plot": "A hacker learns the truth."
            })
        );
    }

    #[tokio::test]
    async fn test_get_unknown_movie() {
        let (status, body) = get(movies(), "/data/tt0000000").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"error": true, "message": "No record exists of a movie with this ID"})
        );
    }

    #[tokio::test]
    async fn test_get_movie_rejects_query() {
        let (status, body) = get(movies(), "/data/tt0133093?year=1999").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Invalid query parameters: year. Query parameters are not permitted."
        );
    }
}

#[cfg(test)]
mod person_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::support::*;

    #[tokio::test]
    async fn test_get_person() {
        let (status, body) = get(people(), "/nm0000206").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "name": "Keanu Reeves",
                "birthYear": 1964,
                "deathYear": null,
                "roles": [{
                    "movieName": "The Matrix",
                    "movieId": "tt0133093",
                    "category": "actor",
                    "characters": ["Neo"],
                    "imdbRating": 8.7
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_get_unknown_person() {
        let (status, body) = get(people(), "/nm9999999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "No record exists of a person with this ID");
    }

    #[tokio::test]
    async fn test_get_person_rejects_query() {
        let (status, body) = get(people(), "/nm0000206?a=1&b=2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Invalid query parameters: a, b. Query parameters are not permitted."
        );
    }
}

#[cfg(test)]
mod guarded_person_tests {
    use std::sync::Arc;

    use auth::domain::token::{Claims, TokenCodec};
    use auth::middleware::{GuardState, require_bearer};
    use axum::Router;
    use axum::http::StatusCode;
    use axum::middleware::from_fn_with_state;
    use platform::clock::FixedClock;

    use super::support::*;

    const NOW: i64 = 1_700_000_000;
    const SECRET: &[u8] = b"people-guard-secret";

    fn guarded_people() -> Router {
        let codec = Arc::new(TokenCodec::new(SECRET));
        let guard = GuardState::new(codec, Arc::new(FixedClock::at_unix(NOW)));
        people().route_layer(from_fn_with_state(guard, require_bearer))
    }

    fn bearer(exp: i64) -> String {
        let token = TokenCodec::new(SECRET)
            .sign(&Claims::new("alice@x.com", exp))
            .unwrap();
        format!("Bearer {token}")
    }

    #[tokio::test]
    async fn test_person_requires_valid_bearer() {
        let (status, body) = get_with(guarded_people(), "/nm0000206", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body["message"],
            "Authorization header ('Bearer token') not found"
        );

        let (status, body) = get_with(
            guarded_people(),
            "/nm0000206",
            Some("Bearer invalid.token.here"),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid JWT token");

        let expired = bearer(NOW);
        let (status, body) = get_with(guarded_people(), "/nm0000206", Some(&expired)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "JWT token has expired");
    }

    #[tokio::test]
    async fn test_person_with_valid_bearer() {
        let valid = bearer(NOW + 600);
        let (status, body) = get_with(guarded_people(), "/nm0000206", Some(&valid)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Keanu Reeves");
    }
}
