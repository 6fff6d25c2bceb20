//! Refresh Use Case
//!
//! Exchanges a verified refresh token for a fresh pair.

use crate::application::issue_tokens::{SessionIssuer, TokenPair};
use crate::domain::entity::identity::Identity;
use crate::error::AuthResult;

pub struct RefreshUseCase {
    issuer: SessionIssuer,
}

impl RefreshUseCase {
    pub fn new(issuer: SessionIssuer) -> Self {
        Self { issuer }
    }

    pub fn execute(&self, identity: &Identity) -> AuthResult<TokenPair> {
        let pair = self.issuer.issue(&identity.email)?;

        tracing::debug!(email = %identity.email, "Token pair refreshed");

        Ok(pair)
    }
}
