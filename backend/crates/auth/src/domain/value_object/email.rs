//! Email Value Object
//!
//! Account key. Any non-empty string is accepted and kept exactly as
//! submitted: no case folding and no format check, so the token subject, the
//! stored row and the profile path all agree byte-for-byte.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new account key; only the empty string is refused
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_any_non_empty_key() {
        assert!(Email::new("alice@x.com").is_ok());
        assert!(Email::new("test@localhost").is_ok());
        assert!(Email::new("alice").is_ok());
        assert!(Email::new("").is_err());
    }

    #[test]
    fn test_email_case_preserved() {
        let email = Email::new("Alice@X.com").unwrap();
        assert_eq!(email.as_str(), "Alice@X.com");
        assert_ne!(email, Email::new("alice@x.com").unwrap());
    }
}
