//! Auth Middleware
//!
//! Guards for protected routes. Each one locates the credential for its
//! policy, delegates the decision to [`authorize`], and on success stores the
//! caller in request extensions:
//!
//! - [`Viewer`] always
//! - [`Identity`] only when a token was verified
//!
//! [`Identity`]: crate::domain::entity::identity::Identity

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::clock::Clock;
use serde_json::Value;

use crate::application::authorize::{GuardPolicy, authorize, bearer_token};
use crate::application::config::AuthConfig;
use crate::domain::token::TokenCodec;
use crate::error::AuthError;

/// Largest body the refresh guard will buffer
const MAX_REFRESH_BODY_BYTES: usize = 16 * 1024;

/// Middleware state
#[derive(Clone)]
pub struct GuardState {
    pub codec: Arc<TokenCodec>,
    pub clock: Arc<dyn Clock>,
}

impl GuardState {
    pub fn new(codec: Arc<TokenCodec>, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            Arc::new(TokenCodec::new(&config.jwt_secret)),
            config.clock.clone(),
        )
    }

    fn admit(
        &self,
        policy: GuardPolicy,
        credential: Option<&str>,
        mut req: Request,
    ) -> Result<Request, AuthError> {
        let viewer = authorize(policy, credential, &self.codec, self.clock.unix_seconds())?;

        if let Some(identity) = viewer.identity() {
            req.extensions_mut().insert(identity.clone());
        }
        req.extensions_mut().insert(viewer);

        Ok(req)
    }
}

/// Token from the `Authorization` header; an unreadable value is kept as an
/// empty credential so the codec rejects it
fn bearer_credential(req: &Request) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?;
    match value.to_str() {
        Ok(raw) => bearer_token(raw).map(str::to_owned),
        Err(_) => Some(String::new()),
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_bearer(
    State(state): State<GuardState>,
    req: Request,
    next: Next,
) -> Response {
    let credential = bearer_credential(&req);

    match state.admit(GuardPolicy::STRICT, credential.as_deref(), req) {
        Ok(req) => next.run(req).await,
        Err(e) => e.into_response(),
    }
}

/// Middleware that admits anonymous callers but rejects bad tokens
pub async fn view_profile(
    State(state): State<GuardState>,
    req: Request,
    next: Next,
) -> Response {
    let credential = bearer_credential(&req);

    match state.admit(GuardPolicy::PROFILE_VIEW, credential.as_deref(), req) {
        Ok(req) => next.run(req).await,
        Err(e) => e.into_response(),
    }
}

/// Middleware that requires a valid `refreshToken` in the JSON body
///
/// The body is buffered for inspection and handed on to the handler intact.
pub async fn require_refresh_token(
    State(state): State<GuardState>,
    req: Request,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();

    let bytes = match to_bytes(body, MAX_REFRESH_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "Refresh body could not be read");
            return AuthError::MissingRefreshToken.into_response();
        }
    };

    let credential = refresh_token_field(&bytes);
    let req = Request::from_parts(parts, Body::from(bytes));

    match state.admit(GuardPolicy::REFRESH_ONLY, credential.as_deref(), req) {
        Ok(req) => next.run(req).await,
        Err(e) => e.into_response(),
    }
}

/// Non-empty string `refreshToken` from a JSON object body
fn refresh_token_field(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let token = value.get("refreshToken")?.as_str()?;
    (!token.is_empty()).then(|| token.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_field() {
        assert_eq!(
            refresh_token_field(br#"{"refreshToken":"a.b.c"}"#).as_deref(),
            Some("a.b.c")
        );
        assert_eq!(refresh_token_field(br#"{"refreshToken":""}"#), None);
        assert_eq!(refresh_token_field(br#"{"refreshToken":null}"#), None);
        assert_eq!(refresh_token_field(br#"{"refreshToken":42}"#), None);
        assert_eq!(refresh_token_field(br#"{"other":"a.b.c"}"#), None);
        assert_eq!(refresh_token_field(br#"["refreshToken"]"#), None);
        assert_eq!(refresh_token_field(b"refreshToken=a.b.c"), None);
        assert_eq!(refresh_token_field(b""), None);
    }
}
