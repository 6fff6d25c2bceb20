//! Value Object Module

pub mod date_of_birth;
pub mod email;
