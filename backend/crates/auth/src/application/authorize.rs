//! Request Authorization
//!
//! The three guard policies share one decision procedure: locate the
//! credential, verify it, and map each failure to the error the route exposes.
//!
//! | policy         | credential source        | when missing     |
//! |----------------|--------------------------|------------------|
//! | `STRICT`       | `Authorization` header   | 401 reject       |
//! | `PROFILE_VIEW` | `Authorization` header   | anonymous viewer |
//! | `REFRESH_ONLY` | body `refreshToken`      | 400 reject       |
//!
//! A credential that is present but invalid or expired is always rejected,
//! including under `PROFILE_VIEW`.

use crate::domain::entity::identity::{Identity, Viewer};
use crate::domain::token::TokenCodec;
use crate::error::{AuthError, AuthResult};

/// Where a guard looks for the token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    BearerHeader,
    RefreshTokenField,
}

/// What a guard does when no token is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMissing {
    Reject,
    Anonymous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardPolicy {
    pub source: CredentialSource,
    pub on_missing: OnMissing,
}

impl GuardPolicy {
    pub const STRICT: Self = Self {
        source: CredentialSource::BearerHeader,
        on_missing: OnMissing::Reject,
    };

    pub const PROFILE_VIEW: Self = Self {
        source: CredentialSource::BearerHeader,
        on_missing: OnMissing::Anonymous,
    };

    pub const REFRESH_ONLY: Self = Self {
        source: CredentialSource::RefreshTokenField,
        on_missing: OnMissing::Reject,
    };

    fn missing_error(&self) -> AuthError {
        match self.source {
            CredentialSource::BearerHeader => AuthError::MissingAuthHeader,
            CredentialSource::RefreshTokenField => AuthError::MissingRefreshToken,
        }
    }
}

/// Extract the token from an `Authorization` header value
///
/// A blank header counts as no credential. Anything else is handed to the
/// codec with an optional `Bearer ` prefix removed, so a foreign scheme or an
/// empty bearer token is rejected as invalid rather than ignored.
pub fn bearer_token(header: &str) -> Option<&str> {
    if header.trim().is_empty() {
        return None;
    }
    Some(header.strip_prefix("Bearer ").unwrap_or(header).trim())
}

/// Decide who the caller is under `policy`
pub fn authorize(
    policy: GuardPolicy,
    credential: Option<&str>,
    codec: &TokenCodec,
    now: i64,
) -> AuthResult<Viewer> {
    let Some(token) = credential else {
        return match policy.on_missing {
            OnMissing::Reject => Err(policy.missing_error()),
            OnMissing::Anonymous => Ok(Viewer::Anonymous),
        };
    };

    let claims = codec.verify(token, now)?;
    Ok(Viewer::Identified(Identity::from(claims)))
}
