//! Application Layer - Use cases

pub mod config;
pub mod get_movie;
pub mod get_person;
pub mod search_movies;

pub use config::CatalogConfig;
pub use get_movie::GetMovieUseCase;
pub use get_person::GetPersonUseCase;
pub use search_movies::{SearchMoviesInput, SearchMoviesOutput, SearchMoviesUseCase};
