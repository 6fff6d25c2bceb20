//! Domain Layer - Catalogue records and lookup rules
//!
//! This layer contains:
//! - Domain entities (raw store records and the assembled views)
//! - Domain value objects (search filter, page number, release year)
//! - Domain services (rating parsing, record assembly, pagination)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
