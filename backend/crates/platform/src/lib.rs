//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain meaning:
//! - Wall clock abstraction (injectable for tests)
//! - Password hashing (bcrypt)
//! - Secure random bytes

pub mod clock;
pub mod crypto;
pub mod password;
