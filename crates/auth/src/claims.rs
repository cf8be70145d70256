//! Session token claims

use serde::{Deserialize, Serialize};

use crate::types::UserRole;

/// Claims carried by a signed session token.
///
/// The token is the sole proof of identity; the role claim is advisory
/// only — middleware re-fetches the user row and takes role/identity
/// from the fresh record.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (username)
    pub sub: String,
    /// Role at issue time
    pub role: UserRole,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}
