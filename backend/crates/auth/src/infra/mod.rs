//! Infrastructure Layer
//!
//! Database implementations of the repository traits.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryAccountRepository;
pub use mysql::MySqlAccountRepository;
