//! Domain Layer
//!
//! Contains entities, value objects, the token codec and repository traits.

pub mod entity;
pub mod repository;
pub mod token;
pub mod value_object;

// Re-exports
pub use entity::{account::Account, identity::Identity, identity::Viewer};
pub use repository::AccountRepository;
pub use token::{Claims, TokenCodec, TokenError};
