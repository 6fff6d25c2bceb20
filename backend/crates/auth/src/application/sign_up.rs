//! Sign Up Use Case
//!
//! Creates a new account with an empty profile.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
///
/// Fields are optional so that an incomplete body is reported as such rather
/// than as a generic parse failure.
#[derive(Debug, Default)]
pub struct SignUpInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub email: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(AuthError::MissingCredentials);
        };
        let email = Email::new(email).map_err(|_| AuthError::MissingCredentials)?;
        let password =
            ClearTextPassword::new(password).map_err(|_| AuthError::MissingCredentials)?;

        // Check if email is taken
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Hash off the async workers
        let cost = self.config.bcrypt_cost;
        let password_hash =
            tokio::task::spawn_blocking(move || password.hash(cost)).await??;

        let account = Account::new(email, password_hash);
        self.repo.create(&account).await?;

        tracing::info!(email = %account.email, "User signed up");

        Ok(SignUpOutput {
            email: account.email.to_string(),
        })
    }
}
