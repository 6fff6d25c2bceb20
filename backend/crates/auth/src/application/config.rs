//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use platform::clock::{Clock, SystemClock};
use platform::password::DEFAULT_COST;

/// Length of a generated signing secret
const GENERATED_SECRET_LENGTH: usize = 32;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret shared by access and refresh tokens
    pub jwt_secret: Vec<u8>,
    /// Bearer token lifetime (10 minutes)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (1 day)
    pub refresh_token_ttl: Duration,
    /// bcrypt cost factor for new hashes
    pub bcrypt_cost: u32,
    /// Time source for token expiry and dob checks
    pub clock: Arc<dyn Clock>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Vec::new(),
            access_token_ttl: Duration::from_secs(10 * 60), // 10 minutes
            refresh_token_ttl: Duration::from_secs(24 * 3600), // 1 day
            bcrypt_cost: DEFAULT_COST,
            clock: Arc::new(SystemClock),
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_bytes(GENERATED_SECRET_LENGTH))
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Bearer token lifetime in seconds
    pub fn access_token_ttl_secs(&self) -> i64 {
        self.access_token_ttl.as_secs() as i64
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_token_ttl_secs(&self) -> i64 {
        self.refresh_token_ttl.as_secs() as i64
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_ttl_secs(), 600);
        assert_eq!(config.refresh_token_ttl_secs(), 86_400);
        assert_eq!(config.bcrypt_cost, 10);
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.jwt_secret.len(), GENERATED_SECRET_LENGTH);
        assert_ne!(a.jwt_secret, b.jwt_secret);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::with_secret("hunter2-hunter2");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }
}
