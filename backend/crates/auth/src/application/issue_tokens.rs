//! Token Issuance
//!
//! Mints the bearer/refresh pair handed out by login and refresh.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::token::{Claims, TokenCodec};
use crate::error::AuthResult;

/// A signed token and its lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Seconds
    pub expires_in: i64,
}

/// Bearer plus refresh token for one subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}

/// Signs token pairs with configured lifetimes
pub struct SessionIssuer {
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
}

impl SessionIssuer {
    pub fn new(codec: Arc<TokenCodec>, config: Arc<AuthConfig>) -> Self {
        Self { codec, config }
    }

    /// Issue both tokens for `email`, expiring relative to the configured clock
    pub fn issue(&self, email: &str) -> AuthResult<TokenPair> {
        let now = self.config.clock.unix_seconds();
        let access_ttl = self.config.access_token_ttl_secs();
        let refresh_ttl = self.config.refresh_token_ttl_secs();

        let access = self.codec.sign(&Claims::new(email, now + access_ttl))?;
        let refresh = self.codec.sign(&Claims::new(email, now + refresh_ttl))?;

        Ok(TokenPair {
            access: IssuedToken {
                token: access,
                expires_in: access_ttl,
            },
            refresh: IssuedToken {
                token: refresh,
                expires_in: refresh_ttl,
            },
        })
    }
}
