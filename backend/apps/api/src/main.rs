//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use auth::middleware::{GuardState, require_bearer};
use auth::{AuthConfig, InMemoryAccountRepository, MySqlAccountRepository};
use axum::middleware::from_fn_with_state;
use axum::{
    Router, http,
    http::{Method, header},
};
use catalog::{CatalogConfig, MySqlCatalogRepository};
use kernel::error::app_error::AppError;
use sqlx::mysql::MySqlPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Auth configuration
    let auth_config = load_auth_config()?;
    let guard = GuardState::from_config(&auth_config);

    // Database connection (optional)
    let pool = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
                Ok(raw) => raw
                    .parse::<u32>()
                    .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
                Err(_) => DEFAULT_MAX_CONNECTIONS,
            };

            let pool = MySqlPoolOptions::new()
                .max_connections(max_connections)
                .connect(&database_url)
                .await
                .context("Failed to connect to database")?;

            tracing::info!(max_connections, "Connected to database");
            Some(pool)
        }
        Err(_) => {
            tracing::warn!(
                "DATABASE_URL not set: using in-memory accounts, movie and people routes disabled"
            );
            None
        }
    };

    // Build router
    let app = match pool {
        Some(pool) => {
            let people = catalog::people_router(
                MySqlCatalogRepository::new(pool.clone()),
                CatalogConfig::default(),
            )
            .route_layer(from_fn_with_state(guard, require_bearer));

            Router::new()
                .nest(
                    "/user",
                    auth::auth_router(MySqlAccountRepository::new(pool.clone()), auth_config),
                )
                .nest(
                    "/movies",
                    catalog::movies_router(
                        MySqlCatalogRepository::new(pool),
                        CatalogConfig::default(),
                    ),
                )
                .nest("/people", people)
        }
        None => Router::new().nest(
            "/user",
            auth::auth_router_generic(InMemoryAccountRepository::new(), auth_config),
        ),
    };

    let app = app
        .fallback(|| async { AppError::not_found("Not found") })
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Token signing secret from `JWT_SECRET`
///
/// Release builds refuse to start without one; debug builds fall back to a
/// random secret.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    match env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(AuthConfig::with_secret(secret)),
        _ if cfg!(debug_assertions) => {
            tracing::warn!(
                "JWT_SECRET not set: using a random secret, tokens will not survive a restart"
            );
            Ok(AuthConfig::development())
        }
        _ => anyhow::bail!("JWT_SECRET must be set in production"),
    }
}

fn cors_layer() -> CorsLayer {
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3001,http://127.0.0.1:3001".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
