//! Token Codec
//!
//! Compact HS256-signed JWTs carrying `{ email, exp }`. Access and refresh
//! tokens share this format and differ only in lifetime.
//!
//! Expiry is checked here, once, against the caller-supplied `now`; the JWT
//! library's own wall-clock `exp` validation is switched off so that time stays
//! injectable.

use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{AuthError, AuthResult};

/// Signed payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject account
    pub email: String,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl Claims {
    pub fn new(email: impl Into<String>, exp: i64) -> Self {
        Self {
            email: email.into(),
            exp,
        }
    }
}

/// Verification failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature mismatch or not a well-formed token
    #[error("token signature or structure is invalid")]
    Invalid,

    /// Well-formed and correctly signed, but `exp <= now`
    #[error("token has expired")]
    Expired,
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => AuthError::InvalidToken,
            TokenError::Expired => AuthError::TokenExpired,
        }
    }
}

/// Signs and verifies tokens with one shared secret
pub struct TokenCodec {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            header: Header::new(Algorithm::HS256),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn sign(&self, claims: &Claims) -> AuthResult<String> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
    }

    /// Verify signature and structure, then expiry against `now` (unix seconds)
    pub fn verify(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        if data.claims.exp <= now {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.header.alg)
            .finish_non_exhaustive()
    }
}
