//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    GetProfileUseCase, ProfileDraft, RefreshUseCase, SessionIssuer, SignInInput, SignInUseCase,
    SignOutUseCase, SignUpInput, SignUpUseCase, UpdateProfileUseCase,
};
use crate::domain::entity::identity::{Identity, Viewer};
use crate::domain::repository::AccountRepository;
use crate::domain::token::TokenCodec;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    FullProfileResponse, LogoutResponse, ProfileResponse, SignInRequest, SignUpRequest,
    SignUpResponse, TokenPairResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub codec: Arc<TokenCodec>,
}

impl<R> AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    fn issuer(&self) -> SessionIssuer {
        SessionIssuer::new(self.codec.clone(), self.config.clone())
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /user/register
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|_| AuthError::MissingCredentials)?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(SignUpResponse::created())))
}

// ============================================================================
// Login
// ============================================================================

/// POST /user/login
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> AuthResult<Json<TokenPairResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|_| AuthError::MissingCredentials)?;

    let use_case = SignInUseCase::new(state.repo.clone(), state.issuer());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let pair = use_case.execute(input).await?;

    Ok(Json(pair.into()))
}

// ============================================================================
// Refresh / Logout
// ============================================================================

/// POST /user/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> AuthResult<Json<TokenPairResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let pair = RefreshUseCase::new(state.issuer()).execute(&identity)?;

    Ok(Json(pair.into()))
}

/// POST /user/logout
pub async fn sign_out(Extension(identity): Extension<Identity>) -> Json<LogoutResponse> {
    SignOutUseCase::new().execute(&identity);

    Json(LogoutResponse::invalidated())
}

// ============================================================================
// Profile
// ============================================================================

/// GET /user/{email}/profile
pub async fn get_profile<R>(
    State(state): State<AuthAppState<R>>,
    Path(email): Path<String>,
    Extension(viewer): Extension<Viewer>,
) -> AuthResult<Json<ProfileResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());

    let view = use_case.execute(&email, &viewer).await?;

    Ok(Json(view.into()))
}

/// PUT /user/{email}/profile
///
/// An unreadable body becomes an empty draft, reported as incomplete only
/// after the account and ownership checks.
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    Path(email): Path<String>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<ProfileDraft>, JsonRejection>,
) -> AuthResult<Json<FullProfileResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable profile body");
            ProfileDraft::default()
        }
    };

    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.config.clone());

    let account = use_case.execute(&email, &identity, draft).await?;

    Ok(Json(account.into()))
}
