//! Application Layer
//!
//! Use cases and application services.

pub mod authorize;
pub mod config;
pub mod issue_tokens;
pub mod profile;
pub mod refresh;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use authorize::{CredentialSource, GuardPolicy, OnMissing, authorize, bearer_token};
pub use config::AuthConfig;
pub use issue_tokens::{IssuedToken, SessionIssuer, TokenPair};
pub use profile::{GetProfileUseCase, ProfileDraft, ProfileView, UpdateProfileUseCase};
pub use refresh::RefreshUseCase;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
