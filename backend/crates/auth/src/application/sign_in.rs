//! Sign In Use Case
//!
//! Checks credentials and issues a token pair.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::issue_tokens::{SessionIssuer, TokenPair};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
#[derive(Debug, Default)]
pub struct SignInInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    issuer: SessionIssuer,
}

impl<R> SignInUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, issuer: SessionIssuer) -> Self {
        Self { repo, issuer }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<TokenPair> {
        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(AuthError::MissingCredentials);
        };
        let email = Email::new(email).map_err(|_| AuthError::MissingCredentials)?;
        let password =
            ClearTextPassword::new(password).map_err(|_| AuthError::MissingCredentials)?;

        // Unknown account and wrong password fail the same way
        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = account.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || hash.verify(&password)).await??;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let pair = self.issuer.issue(account.email.as_str())?;

        tracing::info!(email = %account.email, "User signed in");

        Ok(pair)
    }
}
