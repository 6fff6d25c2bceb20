//! Profile Use Cases
//!
//! Reading a profile is open to anyone (owners see more); updating one is
//! restricted to its owner.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::{Account, ProfileDetails};
use crate::domain::entity::identity::{Identity, Viewer};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{date_of_birth::DateOfBirth, email::Email};
use crate::error::{AuthError, AuthResult};

/// Profile as visible to a particular viewer
#[derive(Debug)]
pub enum ProfileView {
    /// Owner sees every field
    Full(Account),
    /// Everyone else sees name fields only
    Public(Account),
}

/// Get profile use case
pub struct GetProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> GetProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, email: &str, viewer: &Viewer) -> AuthResult<ProfileView> {
        let account = self
            .repo
            .find_by_email(&Email::from_db(email))
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if viewer.owns(email) {
            Ok(ProfileView::Full(account))
        } else {
            Ok(ProfileView::Public(account))
        }
    }
}

/// Raw profile update body
///
/// Kept as untyped JSON values until the account and ownership checks have
/// passed, so those take precedence over body validation.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub dob: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
}

impl ProfileDraft {
    /// Validate into a complete profile, checking `dob` against `today`
    pub fn validate(&self, today: NaiveDate) -> AuthResult<ProfileDetails> {
        let fields = [&self.first_name, &self.last_name, &self.dob, &self.address];

        if fields.iter().any(|field| is_blank(field.as_ref())) {
            return Err(AuthError::ProfileIncomplete);
        }

        let strings: Vec<&str> = fields
            .iter()
            .filter_map(|field| field.as_ref().and_then(Value::as_str))
            .collect();
        let &[first_name, last_name, dob, address] = strings.as_slice() else {
            return Err(AuthError::ProfileNotStrings);
        };

        let dob = DateOfBirth::parse(dob, today)?;

        Ok(ProfileDetails {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            dob,
            address: address.to_string(),
        })
    }
}

/// Absent, null, empty string, `false` or zero
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(_) | Value::Object(_)) => false,
    }
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        email: &str,
        identity: &Identity,
        draft: ProfileDraft,
    ) -> AuthResult<Account> {
        let mut account = self
            .repo
            .find_by_email(&Email::from_db(email))
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !identity.owns(email) {
            return Err(AuthError::Forbidden);
        }

        let details = draft.validate(self.config.clock.today())?;
        account.set_profile(details);
        self.repo.update_profile(&account).await?;

        tracing::info!(email = %account.email, "Profile updated");

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn draft(value: Value) -> ProfileDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_draft() {
        let details = draft(json!({
            "firstName": "Alice",
            "lastName": "Smith",
            "dob": "2000-02-29",
            "address": "1 Main St"
        }))
        .validate(today())
        .unwrap();

        assert_eq!(details.first_name, "Alice");
        assert_eq!(details.last_name, "Smith");
        assert_eq!(details.dob.to_string(), "2000-02-29");
        assert_eq!(details.address, "1 Main St");
    }

    #[test]
    fn test_incomplete_draft() {
        let cases = [
            json!({}),
            json!({"firstName": "A", "lastName": "B", "dob": "2000-01-01"}),
            json!({"firstName": "A", "lastName": "B", "dob": "2000-01-01", "address": null}),
            json!({"firstName": "", "lastName": "B", "dob": "2000-01-01", "address": "C"}),
            json!({"firstName": "A", "lastName": 0, "dob": "2000-01-01", "address": "C"}),
            json!({"firstName": "A", "lastName": "B", "dob": false, "address": "C"}),
        ];
        for case in cases {
            assert!(
                matches!(draft(case.clone()).validate(today()), Err(AuthError::ProfileIncomplete)),
                "{case}"
            );
        }
    }

    #[test]
    fn test_non_string_draft() {
        let cases = [
            json!({"firstName": 1, "lastName": "B", "dob": "2000-01-01", "address": "C"}),
            json!({"firstName": "A", "lastName": "B", "dob": "2000-01-01", "address": ["C"]}),
            json!({"firstName": "A", "lastName": true, "dob": "2000-01-01", "address": "C"}),
            json!({"firstName": "A", "lastName": "B", "dob": 20000101, "address": "C"}),
        ];
        for case in cases {
            assert!(
                matches!(draft(case.clone()).validate(today()), Err(AuthError::ProfileNotStrings)),
                "{case}"
            );
        }
    }

    #[test]
    fn test_dob_checks() {
        let with_dob = |dob: &str| {
            draft(json!({"firstName": "A", "lastName": "B", "dob": dob, "address": "C"}))
                .validate(today())
        };

        assert!(matches!(with_dob("2024-02-30"), Err(AuthError::InvalidDob)));
        assert!(matches!(with_dob("2001-02-29"), Err(AuthError::InvalidDob)));
        assert!(matches!(with_dob("15/06/2000"), Err(AuthError::InvalidDob)));
        assert!(matches!(with_dob("2024-06-16"), Err(AuthError::DobNotInPast)));
        assert!(with_dob("2024-06-15").is_ok());
        assert!(with_dob("2000-02-29").is_ok());
    }
}
