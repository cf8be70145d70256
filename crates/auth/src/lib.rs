//! Authentication for the Future Furniture API
//!
//! Provides session token issue/verify, credential authentication, and
//! axum extractors that work with any domain state implementing
//! `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod types;

pub use backend::AuthBackend;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::{DesignerUser, SessionUser, SESSION_COOKIE};
pub use types::{AuthIdentity, UserRole};
