//! MySQL Repository Implementation
//!
//! Backed by the `users` table: `email` (unique), `hash`, and the nullable
//! profile columns `firstName`, `lastName`, `dob` (DATE) and `address`.

use chrono::NaiveDate;
use platform::password::HashedPassword;
use sqlx::MySqlPool;

use crate::domain::entity::account::{Account, Profile};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{date_of_birth::DateOfBirth, email::Email};
use crate::error::{AuthError, AuthResult};

/// MySQL-backed account repository
#[derive(Clone)]
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                email,
                hash,
                firstName,
                lastName,
                dob,
                address
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, account: &Account) -> AuthResult<()> {
        sqlx::query("INSERT INTO users (email, hash) VALUES (?, ?)")
            .bind(account.email.as_str())
            .bind(account.password_hash.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => AuthError::EmailTaken,
                _ => AuthError::Database(e),
            })?;

        Ok(())
    }

    async fn update_profile(&self, account: &Account) -> AuthResult<()> {
        let profile = &account.profile;

        sqlx::query(
            r#"
            UPDATE users SET
                firstName = ?,
                lastName = ?,
                dob = ?,
                address = ?
            WHERE email = ?
            "#,
        )
        .bind(profile.first_name.as_deref())
        .bind(profile.last_name.as_deref())
        .bind(profile.dob.map(|dob| dob.as_date()))
        .bind(profile.address.as_deref())
        .bind(account.email.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    email: String,
    hash: String,
    #[sqlx(rename = "firstName")]
    first_name: Option<String>,
    #[sqlx(rename = "lastName")]
    last_name: Option<String>,
    dob: Option<NaiveDate>,
    address: Option<String>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = HashedPassword::from_stored(self.hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored hash: {}", e)))?;

        Ok(Account {
            email: Email::from_db(self.email),
            password_hash,
            profile: Profile {
                first_name: self.first_name,
                last_name: self.last_name,
                dob: self.dob.map(DateOfBirth::from_db),
                address: self.address,
            },
        })
    }
}
