//! Authorization context for authenticated callers

use crate::types::{AuthIdentity, UserRole};

/// Represents an authenticated caller.
///
/// Built by the session extractors from a freshly-fetched user row, never
/// from token claims alone.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    /// Check if the caller holds the designer role
    pub fn is_designer(&self) -> bool {
        self.user.role == UserRole::Designer
    }

    /// Check if the caller owns the given design
    pub fn owns(&self, owner_id: uuid::Uuid) -> bool {
        self.user.id == owner_id
    }
}
