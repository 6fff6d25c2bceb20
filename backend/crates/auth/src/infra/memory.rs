//! In-Memory Repository Implementation
//!
//! Used when no database is configured and by the router tests.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Process-local account store keyed by exact email
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.accounts.read().await.contains_key(email))
    }

    async fn create(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(AuthError::EmailTaken);
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(())
    }

    async fn update_profile(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(&account.email)
            .ok_or(AuthError::UserNotFound)?;
        stored.profile = account.profile.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    const TEST_COST: u32 = 4;

    fn account(email: &str) -> Account {
        let hash = ClearTextPassword::new("pw".to_string())
            .unwrap()
            .hash(TEST_COST)
            .unwrap();
        Account::new(Email::new(email).unwrap(), hash)
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate() {
        let repo = InMemoryAccountRepository::new();
        repo.create(&account("alice@x.com")).await.unwrap();

        let err = repo.create(&account("alice@x.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let repo = InMemoryAccountRepository::new();
        repo.create(&account("alice@x.com")).await.unwrap();

        assert!(repo.exists_by_email(&Email::from_db("alice@x.com")).await.unwrap());
        assert!(!repo.exists_by_email(&Email::from_db("Alice@x.com")).await.unwrap());
    }
}
