//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. The `Display` text of each client-facing
//! variant is the exact message returned in the `{ error, message }` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::date_of_birth::DobError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Register/login body lacks email or password
    #[error("Request body incomplete - email and password needed")]
    MissingCredentials,

    /// Register email already present
    #[error("User already exists")]
    EmailTaken,

    /// Unknown account or wrong password (deliberately indistinguishable)
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// No `Authorization: Bearer` header on a strictly guarded route
    #[error("Authorization header ('Bearer token') not found")]
    MissingAuthHeader,

    /// No `refreshToken` in the body of a refresh-guarded route
    #[error("Request body incomplete, refresh token required")]
    MissingRefreshToken,

    /// Bad signature or malformed token
    #[error("Invalid JWT token")]
    InvalidToken,

    /// Token past its `exp`
    #[error("JWT token has expired")]
    TokenExpired,

    #[error("User not found")]
    UserNotFound,

    /// Caller is not the account owner
    #[error("Forbidden")]
    Forbidden,

    #[error("Request body incomplete: firstName, lastName, dob and address are required.")]
    ProfileIncomplete,

    #[error("Request body invalid: firstName, lastName and address must be strings only.")]
    ProfileNotStrings,

    #[error("Invalid input: dob must be a real date in format YYYY-MM-DD.")]
    InvalidDob,

    #[error("Invalid input: dob must be a date in the past.")]
    DobNotInPast,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::MissingRefreshToken
            | AuthError::ProfileIncomplete
            | AuthError::ProfileNotStrings
            | AuthError::InvalidDob
            | AuthError::DobNotInPast => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::MissingAuthHeader
            | AuthError::InvalidToken
            | AuthError::TokenExpired => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected token with invalid signature or structure");
            }
            AuthError::Forbidden => {
                tracing::warn!("Profile update attempted on another account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<DobError> for AuthError {
    fn from(err: DobError) -> Self {
        match err {
            DobError::InvalidFormat => AuthError::InvalidDob,
            DobError::NotInPast => AuthError::DobNotInPast,
        }
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Password task failed: {err}"))
    }
}
