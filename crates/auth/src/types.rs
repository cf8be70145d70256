//! Session read-model types
//!
//! Lightweight views of the same DB rows owned by the accounts domain.
//! These types carry only the fields needed for authentication and
//! authorization; the password hash never leaves the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight identity for authenticated users.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// User role for authorization decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Designer,
    Customer,
}

impl UserRole {
    /// Check if this role may create and own designs
    pub fn is_designer(&self) -> bool {
        matches!(self, UserRole::Designer)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Designer => write!(f, "designer"),
            UserRole::Customer => write!(f, "customer"),
        }
    }
}
