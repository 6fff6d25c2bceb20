//! Account Entity
//!
//! One row of the credential store: login key, password hash, and the profile
//! fields that stay empty until the owner fills them in.

use platform::password::HashedPassword;

use crate::domain::value_object::{date_of_birth::DateOfBirth, email::Email};

#[derive(Debug, Clone)]
pub struct Account {
    pub email: Email,
    pub password_hash: HashedPassword,
    pub profile: Profile,
}

/// Profile fields; all optional until the first update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<DateOfBirth>,
    pub address: Option<String>,
}

/// A complete, validated profile as submitted by the owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    pub first_name: String,
    pub last_name: String,
    pub dob: DateOfBirth,
    pub address: String,
}

impl Account {
    /// New account with an empty profile
    pub fn new(email: Email, password_hash: HashedPassword) -> Self {
        Self {
            email,
            password_hash,
            profile: Profile::default(),
        }
    }

    /// Replace all four profile fields
    pub fn set_profile(&mut self, details: ProfileDetails) {
        self.profile = Profile {
            first_name: Some(details.first_name),
            last_name: Some(details.last_name),
            dob: Some(details.dob),
            address: Some(details.address),
        };
    }
}
