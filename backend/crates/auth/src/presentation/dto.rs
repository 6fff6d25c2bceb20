//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::issue_tokens::{IssuedToken, TokenPair};
use crate::application::profile::ProfileView;
use crate::domain::entity::account::Account;
use crate::domain::value_object::date_of_birth::DateOfBirth;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub success: bool,
    pub message: &'static str,
}

impl SignUpResponse {
    pub fn created() -> Self {
        Self {
            success: true,
            message: "User created",
        }
    }
}

// ============================================================================
// Login / Refresh
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// One token as returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct TokenBody {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

impl TokenBody {
    fn new(issued: IssuedToken, token_type: &'static str) -> Self {
        Self {
            token: issued.token,
            token_type,
            expires_in: issued.expires_in,
        }
    }
}

/// Login and refresh response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub bearer_token: TokenBody,
    pub refresh_token: TokenBody,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            bearer_token: TokenBody::new(pair.access, "Bearer"),
            refresh_token: TokenBody::new(pair.refresh, "Refresh"),
        }
    }
}

// ============================================================================
// Logout
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub error: bool,
    pub message: &'static str,
}

impl LogoutResponse {
    pub fn invalidated() -> Self {
        Self {
            error: false,
            message: "Token successfully invalidated",
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Name fields visible to everyone
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileResponse {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Every profile field, for the owner
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullProfileResponse {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<DateOfBirth>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Full(FullProfileResponse),
    Public(PublicProfileResponse),
}

impl From<Account> for FullProfileResponse {
    fn from(account: Account) -> Self {
        Self {
            email: account.email.to_string(),
            first_name: account.profile.first_name,
            last_name: account.profile.last_name,
            dob: account.profile.dob,
            address: account.profile.address,
        }
    }
}

impl From<Account> for PublicProfileResponse {
    fn from(account: Account) -> Self {
        Self {
            email: account.email.to_string(),
            first_name: account.profile.first_name,
            last_name: account.profile.last_name,
        }
    }
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        match view {
            ProfileView::Full(account) => ProfileResponse::Full(account.into()),
            ProfileView::Public(account) => ProfileResponse::Public(account.into()),
        }
    }
}
