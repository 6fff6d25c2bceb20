//! Auth Router
//!
//! Guards are attached per method so that one path can carry a different
//! policy for reads and writes.

use axum::{
    Router,
    handler::Handler,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::token::TokenCodec;
use crate::infra::mysql::MySqlAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{
    GuardState, require_bearer, require_refresh_token, view_profile,
};

/// Create the Auth router with MySQL repository
pub fn auth_router(repo: MySqlAccountRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let codec = Arc::new(TokenCodec::new(&config.jwt_secret));
    let guard = GuardState::new(codec.clone(), config.clock.clone());
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        codec,
    };

    Router::new()
        .route("/register", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::sign_in::<R>))
        .route(
            "/refresh",
            post(
                handlers::refresh::<R>
                    .layer(from_fn_with_state(guard.clone(), require_refresh_token)),
            ),
        )
        .route(
            "/logout",
            post(handlers::sign_out.layer(from_fn_with_state(guard.clone(), require_refresh_token))),
        )
        .route(
            "/{email}/profile",
            get(handlers::get_profile::<R>.layer(from_fn_with_state(guard.clone(), view_profile)))
                .put(
                    handlers::update_profile::<R>
                        .layer(from_fn_with_state(guard, require_bearer)),
                ),
        )
        .with_state(state)
}
