//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, token codec, repository traits
//! - `application/` - Use cases, guard policies and configuration
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - Account registration and login with email + password
//! - Stateless JWT bearer/refresh token pairs
//! - Owner-only profile updates, public profile reads
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (cost 10) on the blocking pool
//! - HS256 tokens; expiry checked once against an injectable clock
//! - Unknown account and wrong password are indistinguishable to callers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAccountRepository, mysql::MySqlAccountRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
