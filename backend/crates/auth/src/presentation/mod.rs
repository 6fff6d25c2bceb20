//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{GuardState, require_bearer, require_refresh_token, view_profile};
pub use router::{auth_router, auth_router_generic};
