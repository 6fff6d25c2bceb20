//! Shared Kernel - Domain-crossing minimal core
//!
//! Holds the error vocabulary every crate in the workspace agrees on:
//! - [`error::kind::ErrorKind`] - status classification
//! - [`error::app_error::AppError`] - the unified error carried to the HTTP edge
//! - conversions from library errors and the `{ "error": true, "message": ... }`
//!   response envelope
//!
//! Only things with the same meaning across `auth` and `catalog` belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
