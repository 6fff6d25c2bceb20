//! Repository Traits
//!
//! The credential store gateway. The `users` table is owned by the database
//! layer; this crate only reads accounts by email, inserts new ones and writes
//! profile fields.

use crate::domain::entity::account::Account;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Find account by email (exact key)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Check if an account exists for email
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Insert a new account
    ///
    /// Fails with `AuthError::EmailTaken` if the key is already present, even
    /// when a concurrent insert won the race after an `exists_by_email` check.
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Persist the account's profile fields
    async fn update_profile(&self, account: &Account) -> AuthResult<()>;
}
