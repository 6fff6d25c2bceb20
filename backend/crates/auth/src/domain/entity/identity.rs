//! Request identity
//!
//! Produced by the auth guards from a verified token and carried in request
//! extensions for the duration of one request.

use crate::domain::token::Claims;

/// Verified token subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    /// Unix seconds
    pub expires_at: i64,
}

impl Identity {
    /// Whether this identity is the owner of the account keyed by `email`
    ///
    /// Exact comparison; no case folding.
    pub fn owns(&self, email: &str) -> bool {
        self.email == email
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            expires_at: claims.exp,
        }
    }
}

/// Caller as seen by a guard that tolerates anonymous requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Identified(Identity),
}

impl Viewer {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Identified(identity) => Some(identity),
        }
    }

    /// Anonymous viewers own nothing
    pub fn owns(&self, email: &str) -> bool {
        self.identity().is_some_and(|identity| identity.owns(email))
    }
}
