//! Sign Out Use Case
//!
//! Tokens are stateless and nothing is revoked server-side; a verified refresh
//! token is acknowledged and the client discards its pair.

use crate::domain::entity::identity::Identity;

#[derive(Debug, Default)]
pub struct SignOutUseCase;

impl SignOutUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, identity: &Identity) {
        tracing::info!(email = %identity.email, "User signed out");
    }
}
