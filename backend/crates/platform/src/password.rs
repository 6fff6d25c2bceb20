//! Password Hashing and Verification
//!
//! bcrypt with a fixed cost factor. Stored hashes are the standard 60-character
//! modular crypt strings (`$2b$10$...`), so accounts created by earlier
//! deployments keep verifying.
//!
//! ## Security Features
//! - Salted, adaptive hashing (salt generated per hash by `bcrypt`)
//! - Zeroization of clear text on drop
//! - Redacted `Debug` output for both clear text and hashes

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Cost factor used for new hashes (2^10 rounds)
pub const DEFAULT_COST: u32 = 10;

/// Length of a bcrypt modular crypt string
const BCRYPT_HASH_LENGTH: usize = 60;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password cannot be empty")]
    Empty,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(raw))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with a fresh random salt
    ///
    /// Blocking: callers on an async runtime should move this onto the
    /// blocking pool.
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(self.as_bytes(), cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { hash })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular crypt format
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a hash read from storage
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        if hash.len() != BCRYPT_HASH_LENGTH || !hash.starts_with("$2") {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash })
    }

    /// The string to persist
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Blocking, like [`ClearTextPassword::hash`].
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        bcrypt::verify(password.as_bytes(), &self.hash)
            .map_err(|_| PasswordHashError::InvalidHashFormat)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
