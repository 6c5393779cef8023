/// Identity collaborator
///
/// The slice of authentication the workout core depends on:
/// - `UserId`, the owner key every query is scoped by
/// - `IdentityStore`, provisioning and lookup over the `user` table
/// - `CurrentUser`, the login-required extractor for handlers

pub mod directory;
pub mod extract;
pub mod types;

pub use directory::IdentityStore;
pub use extract::{CurrentUser, AUTH_HEADER};
pub use types::UserId;
